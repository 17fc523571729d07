//! Merge engine
//!
//! This module provides the MergeEngine that orchestrates the run: it
//! ingests each transactions file into one shared, insertion-ordered
//! collection and computes the summary statistics over it.
//!
//! The engine enforces the error-tolerance policy:
//! - A missing file is a warning; the run continues with the next file
//! - Any other open failure or mid-file I/O fault abandons only that
//!   file's remaining lines
//! - A malformed line is logged with its raw text and skipped; earlier
//!   records from the same file stay in the collection
//!
//! Nothing here ever aborts the overall run — the summary is always
//! computed over whatever records were successfully parsed.

use crate::core::reporter::{Channel, Reporter};
use crate::io::line_format::format_currency;
use crate::io::reader::PurchaseReader;
use crate::types::{MergeError, Purchase};
use rust_decimal::Decimal;
use std::path::Path;

/// Summary statistics over the merged collection
///
/// `total` and `max` fold from a zero baseline, so an empty collection
/// yields `0`/`0` and a collection of all-negative amounts reports a max
/// of zero. That quirk is intentional and preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of records in the collection
    pub count: usize,
    /// Sum of all amounts
    pub total: Decimal,
    /// Maximum amount, never below zero
    pub max: Decimal,
}

/// Merge engine
///
/// Owns the merged purchase collection for the duration of one run and
/// reports diagnostics through an injected [`Reporter`]. The engine only
/// emits notices; it never configures where they go.
pub struct MergeEngine<'a> {
    transactions: Vec<Purchase>,
    reporter: &'a dyn Reporter,
}

impl<'a> MergeEngine<'a> {
    /// Create an engine with an empty collection
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        MergeEngine {
            transactions: Vec::new(),
            reporter,
        }
    }

    /// Ingest one transactions file into the shared collection
    ///
    /// Appends every successfully parsed record from `path`, in file
    /// order. Never returns an error: every failure is converted to a
    /// notice at the narrowest applicable scope (file or line) and the
    /// run continues. The file handle is scoped to this call and released
    /// on every exit path.
    pub fn ingest_file(&mut self, path: &Path) {
        self.reporter
            .info(Channel::File, &format!("import data from {}", path.display()));

        let reader = match PurchaseReader::open(path) {
            Ok(reader) => reader,
            Err(error @ MergeError::FileNotFound { .. }) => {
                self.reporter
                    .warn(Channel::File, &format!("{} - skip", error));
                return;
            }
            Err(error) => {
                self.reporter.error(Channel::File, &error.to_string());
                return;
            }
        };

        for result in reader {
            match result {
                Ok(purchase) => {
                    // Debug-only trace, never required for correctness.
                    self.reporter
                        .debug(Channel::File, &format!("imported transaction {}", purchase));
                    self.transactions.push(purchase);
                }
                Err(error @ MergeError::MalformedLine { .. }) => {
                    // One bad line never aborts the file.
                    self.reporter.error(Channel::File, &error.to_string());
                }
                Err(error) => {
                    // I/O fault mid-file: abandon this file's remaining
                    // lines, keep what was already ingested.
                    self.reporter.error(Channel::File, &error.to_string());
                    return;
                }
            }
        }
    }

    /// The merged collection, in ingestion order
    pub fn transactions(&self) -> &[Purchase] {
        &self.transactions
    }

    /// Compute summary statistics over the merged collection
    pub fn summary(&self) -> Summary {
        Summary {
            count: self.transactions.len(),
            total: self
                .transactions
                .iter()
                .fold(Decimal::ZERO, |sum, p| sum + p.amount),
            max: self
                .transactions
                .iter()
                .fold(Decimal::ZERO, |max, p| max.max(p.amount)),
        }
    }

    /// Report the summary as informational notices
    ///
    /// Three notices on the transactions channel: count, total value,
    /// max value, with the amounts rendered as currency.
    pub fn report_summary(&self) {
        let summary = self.summary();

        self.reporter.info(
            Channel::Transactions,
            &format!("{} transactions imported", summary.count),
        );
        self.reporter.info(
            Channel::Transactions,
            &format!("total value: {}", format_currency(summary.total)),
        );
        self.reporter.info(
            Channel::Transactions,
            &format!("max value: {}", format_currency(summary.max)),
        );
    }
}
