//! Core business logic module
//!
//! This module contains the core merge components:
//! - `engine` - file ingestion and summary aggregation
//! - `reporter` - the injected reporting capability (channels, severities)

pub mod engine;
pub mod reporter;

pub use engine::{MergeEngine, Summary};
pub use reporter::{Channel, LogReporter, MemoryReporter, Notice, Reporter, Severity};
