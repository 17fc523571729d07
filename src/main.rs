//! Transaction Merger CLI
//!
//! Command-line interface for merging purchase transactions from delimited
//! text files and reporting summary statistics.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                   # the four classic files
//! cargo run -- extra.csv more.csv             # explicit file list
//! cargo run -- --log-level file=debug         # per-record import trace
//! ```
//!
//! The program ingests each input file in order into one shared
//! collection, then reports count, total value and max value on the
//! `transactions` log channel. Missing or malformed inputs degrade to
//! warnings and errors on the `file` channel; the summary is always
//! printed and the process always exits normally.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use transaction_merger::cli;
use transaction_merger::core::{LogReporter, MergeEngine};

/// Initialise the global `tracing` subscriber
///
/// `directive` is an `EnvFilter` expression, falling back to `info` if it
/// does not parse. Targets carry the channel names, so the target stays in
/// the output format.
fn setup_logging(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Logging is configured here, once; the core only emits notices
    // through the injected reporter.
    setup_logging(&args.log_level);

    let reporter = LogReporter;
    let mut engine = MergeEngine::new(&reporter);

    // Ingest each file in order; each is independently tolerant of being
    // missing or malformed.
    for path in &args.inputs {
        engine.ingest_file(path);
    }

    engine.report_summary();
}
