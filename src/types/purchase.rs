//! Purchase record type for the transaction merger
//!
//! A purchase is one parsed line from a transactions file. Records are
//! immutable after construction: the merge engine only ever appends them
//! to its collection, never mutates or removes them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

/// Date format used by the transactions files: two-digit day, two-digit
/// month, four-digit year, dash-separated (e.g. `01-02-2023`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// One purchase transaction
///
/// Field values are taken from one input line in fixed order:
/// description, amount, date. Records carry no identity beyond their
/// field values — equality is structural and duplicates are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    /// Free-form text label, taken verbatim from the first field
    pub description: String,

    /// Signed decimal value
    ///
    /// The domain expects non-negative amounts but this is not enforced.
    pub amount: Decimal,

    /// Calendar date of the purchase, no time-of-day component
    pub date: NaiveDate,
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} on {}",
            self.description,
            self.amount,
            self.date.format(DATE_FORMAT)
        )
    }
}
