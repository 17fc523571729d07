use clap::Parser;
use std::path::PathBuf;

/// Classic input set: four fixed filenames resolved relative to the
/// working directory, ingested in this order when no paths are given.
pub const DEFAULT_INPUTS: [&str; 4] = [
    "transactions1.csv",
    "transactions2.csv",
    "transactions3.csv",
    "transactions4.csv",
];

/// Merge transaction files and report summary statistics
#[derive(Parser, Debug)]
#[command(name = "transaction-merger")]
#[command(about = "Merge delimited transaction files and report count, total and max value", long_about = None)]
pub struct CliArgs {
    /// Transactions files to ingest, in order
    ///
    /// Missing or malformed files degrade to log notices; the summary is
    /// always printed over whatever parsed.
    #[arg(value_name = "FILES", default_values = DEFAULT_INPUTS)]
    pub inputs: Vec<PathBuf>,

    /// Log filter directive
    ///
    /// Accepts anything `tracing_subscriber::EnvFilter` understands, e.g.
    /// `debug` or `file=debug,transactions=info`.
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "info",
        help = "Log filter directive, e.g. 'debug' or 'file=debug'"
    )]
    pub log_level: String,
}
