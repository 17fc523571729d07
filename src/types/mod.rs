//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `purchase`: the purchase record and its date format
//! - `error`: error types for parsing and file ingestion

pub mod error;
pub mod purchase;

pub use error::{MergeError, ParseError};
pub use purchase::{Purchase, DATE_FORMAT};
