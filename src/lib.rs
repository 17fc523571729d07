//! Transaction Merger Library
//! # Overview
//!
//! This library reads purchase transactions from delimited text files,
//! merges them into one insertion-ordered collection, and computes summary
//! statistics (count, total value, maximum value).
//!
//! # Architecture
//!
//! The system is organized into a few small components:
//!
//! - [`types`] - Core data types (Purchase, error taxonomy)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - File ingestion and summary aggregation
//!   - [`core::reporter`] - Injected reporting capability (channels,
//!     severities)
//! - [`io`] - Line-format handling and the streaming file reader
//!
//! # Error Tolerance
//!
//! Nothing aborts the overall run. Every failure is caught at the
//! narrowest applicable scope and converted to a logged notice:
//!
//! - A missing file is a warning; the file is skipped
//! - Any other file I/O fault abandons only that file's remaining lines
//! - A malformed line (bad amount, bad date, too few fields) is logged
//!   with its raw text and skipped
//!
//! The summary is always computed over whatever records parsed.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{Channel, LogReporter, MemoryReporter, MergeEngine, Reporter, Summary};
pub use io::PurchaseReader;
pub use types::{MergeError, ParseError, Purchase};
