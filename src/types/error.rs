//! Error types for the transaction merger
//!
//! This module defines all error types that can occur while reading and
//! merging transaction files. Errors are designed to be descriptive enough
//! to be logged as-is: nothing in this system terminates the run.
//!
//! # Error Categories
//!
//! - **Per-line defects** ([`ParseError`]): malformed amount, malformed
//!   date, too few fields. Recoverable — the line is skipped and processing
//!   continues with the next line.
//! - **Per-file defects** ([`MergeError`]): missing file (skip the file),
//!   I/O fault (abort the remaining lines of that file only), or a wrapped
//!   per-line defect carrying the offending raw text.

use thiserror::Error;

/// Per-line parse failure
///
/// Produced while converting one delimited line into a purchase record.
/// Each variant keeps the offending field value so the caller can log a
/// useful diagnostic next to the raw line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The amount field is not a valid decimal number
    #[error("cannot parse amount from string '{value}'")]
    InvalidAmount {
        /// The field value that failed to parse
        value: String,
    },

    /// The date field does not match the expected `DD-MM-YYYY` format
    #[error("cannot parse date from string '{value}', expected DD-MM-YYYY")]
    InvalidDate {
        /// The field value that failed to parse
        value: String,
    },

    /// The line split into fewer fields than the record needs
    ///
    /// This is the generic field-access failure: the parser does not
    /// special-case short lines, it simply fails to find the field.
    #[error("expected 3 fields, found {found}")]
    NotEnoughFields {
        /// Number of fields the line actually split into
        found: usize,
    },

    /// The reader could not produce a record at all (e.g. invalid UTF-8)
    #[error("invalid record: {message}")]
    Syntax {
        /// Description of the record-level defect
        message: String,
    },
}

/// Main error type for file ingestion
///
/// Every variant is non-fatal by policy: the engine converts each one into
/// a logged notice at the narrowest applicable scope and keeps going.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MergeError {
    /// File not found at the given path
    ///
    /// Logged as a warning; the file is skipped and the run continues.
    #[error("file {path} does not exist")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while opening or reading a file
    ///
    /// Logged as an error; only the remaining lines of that file are
    /// abandoned.
    #[error("problem reading file {path}: {message}")]
    Io {
        /// The file being read
        path: String,
        /// Description of the I/O fault
        message: String,
    },

    /// A single line failed to parse
    ///
    /// Carries the offending raw line text together with the parse
    /// failure, so the log notice can show both. Logged as an error; the
    /// line is skipped.
    #[error("cannot parse transaction from line '{raw}': {source}")]
    MalformedLine {
        /// The raw line text as read from the file
        raw: String,
        /// The underlying parse failure
        source: ParseError,
    },
}

impl ParseError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(value: &str) -> Self {
        ParseError::InvalidAmount {
            value: value.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(value: &str) -> Self {
        ParseError::InvalidDate {
            value: value.to_string(),
        }
    }
}

impl MergeError {
    /// Map a file-open failure to the right variant
    ///
    /// `NotFound` becomes [`MergeError::FileNotFound`] (warn-and-skip);
    /// anything else becomes [`MergeError::Io`].
    pub fn from_open_error(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            MergeError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            MergeError::Io {
                path: path.display().to_string(),
                message: error.to_string(),
            }
        }
    }

    /// Wrap a per-line parse failure with the offending raw text
    pub fn malformed_line(raw: &str, source: ParseError) -> Self {
        MergeError::MalformedLine {
            raw: raw.to_string(),
            source,
        }
    }
}
