//! I/O module
//!
//! Handles reading delimited transactions files.
//!
//! # Components
//!
//! - `line_format` - line format handling (record conversion, currency
//!   rendering)
//! - `reader` - streaming purchase reader with iterator interface

pub mod line_format;
pub mod reader;

pub use line_format::{convert_record, format_currency, RawRecord};
pub use reader::PurchaseReader;
