//! Line format handling for transaction records and summary output
//!
//! This module centralizes the delimited-line format concerns, providing:
//! - RawRecord structure for deserialization
//! - Conversion from raw records to the Purchase domain type
//! - Currency rendering for the summary report
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Line Format
//!
//! Each line carries three comma-separated fields in fixed order:
//! `description,amount,date`. There is no header row, no quoting, and no
//! escaping — a comma inside a description is indistinguishable from a
//! field separator and will misparse. That is an accepted limitation of
//! the format, not something this module tries to repair.

use crate::types::{ParseError, Purchase, DATE_FORMAT};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Number of fields a transaction line carries
pub const FIELD_COUNT: usize = 3;

/// Raw record structure for deserialization
///
/// Matches the input line format with positional fields:
/// description, amount, date. All fields are kept as strings so that
/// amount and date failures can be reported with the offending value
/// instead of an opaque deserializer message.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RawRecord {
    pub description: String,
    pub amount: String,
    pub date: String,
}

/// Convert a RawRecord to a Purchase
///
/// This function:
/// - Takes the description verbatim (no trimming, no unquoting)
/// - Parses the amount string into a Decimal (point separator, no
///   grouping separators)
/// - Parses the date string with the fixed `DD-MM-YYYY` format
///
/// # Returns
///
/// Result containing either:
/// - Ok(Purchase) - Successfully converted record
/// - Err(ParseError) - Which field failed and with what value
pub fn convert_record(raw: RawRecord) -> Result<Purchase, ParseError> {
    let amount =
        Decimal::from_str(&raw.amount).map_err(|_| ParseError::invalid_amount(&raw.amount))?;

    let date = NaiveDate::parse_from_str(&raw.date, DATE_FORMAT)
        .map_err(|_| ParseError::invalid_date(&raw.date))?;

    Ok(Purchase {
        description: raw.description,
        amount,
        date,
    })
}

/// Render a decimal amount as a currency string
///
/// Fixed dollar rendering with two decimal places (`16.5` -> `$16.50`).
/// Negative amounts keep their sign after the symbol (`-15` -> `$-15.00`).
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", amount)
}
