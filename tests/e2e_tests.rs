//! End-to-end integration tests
//!
//! These tests validate the complete merge pipeline against a temporary
//! working directory: input files are written to disk, ingested through
//! the engine exactly as the binary would, and the resulting collection
//! and emitted notices are checked.
//!
//! Scenarios covered:
//! - The classic four-file run with missing files and a malformed line
//! - Ordering across multiple files
//! - Per-line tolerance (bad amount, bad date, short line)
//! - The zero-baseline summary quirks (empty input, all-negative amounts)

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use transaction_merger::cli::DEFAULT_INPUTS;
    use transaction_merger::core::{Channel, MemoryReporter, MergeEngine, Severity};

    /// Write one input file into the scratch directory
    fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("Failed to write input file");
        path
    }

    /// Run a full merge over the classic four filenames inside `dir`
    ///
    /// Mirrors the binary's driver loop: each path is ingested in order,
    /// then the summary is reported.
    fn run_classic_merge<'a>(dir: &TempDir, reporter: &'a MemoryReporter) -> MergeEngine<'a> {
        let mut engine = MergeEngine::new(reporter);
        for name in DEFAULT_INPUTS {
            engine.ingest_file(&dir.path().join(name));
        }
        engine.report_summary();
        engine
    }

    #[test]
    fn test_classic_run_with_one_file_and_a_malformed_line() {
        let dir = TempDir::new().unwrap();
        write_input(
            &dir,
            "transactions1.csv",
            "Coffee,4.50,01-02-2023\nBad,abc,01-02-2023\nLunch,12.00,02-02-2023\n",
        );

        let reporter = MemoryReporter::new();
        let engine = run_classic_merge(&dir, &reporter);

        // Exactly the two valid records, in file order.
        let transactions = engine.transactions();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].description, "Coffee");
        assert_eq!(transactions[1].description, "Lunch");

        let summary = engine.summary();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total, Decimal::new(1650, 2));
        assert_eq!(summary.max, Decimal::new(1200, 2));

        // One per-line error, one warning per missing file.
        assert_eq!(reporter.count(Severity::Error, Channel::File), 1);
        assert_eq!(reporter.count(Severity::Warn, Channel::File), 3);

        // Summary notices with currency rendering.
        let notices = reporter.notices();
        let summary_messages: Vec<_> = notices
            .iter()
            .filter(|n| n.channel == Channel::Transactions)
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(
            summary_messages,
            [
                "2 transactions imported",
                "total value: $16.50",
                "max value: $12.00",
            ]
        );
    }

    #[test]
    fn test_records_are_merged_in_file_then_line_order() {
        let dir = TempDir::new().unwrap();
        write_input(
            &dir,
            "transactions1.csv",
            "First,1.00,01-01-2024\nSecond,2.00,02-01-2024\n",
        );
        write_input(&dir, "transactions2.csv", "Third,3.00,03-01-2024\n");
        write_input(&dir, "transactions3.csv", "Fourth,4.00,04-01-2024\n");

        let reporter = MemoryReporter::new();
        let engine = run_classic_merge(&dir, &reporter);

        let descriptions: Vec<_> = engine
            .transactions()
            .iter()
            .map(|p| p.description.as_str())
            .collect();
        assert_eq!(descriptions, ["First", "Second", "Third", "Fourth"]);
        assert_eq!(engine.summary().total, Decimal::new(1000, 2));
    }

    #[test]
    fn test_each_defect_kind_skips_only_its_line() {
        let dir = TempDir::new().unwrap();
        write_input(
            &dir,
            "transactions1.csv",
            "Good,1.00,01-01-2024\n\
             BadAmount,oops,01-01-2024\n\
             BadDate,2.00,2024-01-01\n\
             TooShort,3.00\n\
             AlsoGood,4.00,02-01-2024\n",
        );

        let reporter = MemoryReporter::new();
        let engine = run_classic_merge(&dir, &reporter);

        let descriptions: Vec<_> = engine
            .transactions()
            .iter()
            .map(|p| p.description.as_str())
            .collect();
        assert_eq!(descriptions, ["Good", "AlsoGood"]);

        // One error per defective line, each carrying its raw text.
        let errors: Vec<_> = reporter
            .notices()
            .into_iter()
            .filter(|n| n.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].message.contains("BadAmount,oops,01-01-2024"));
        assert!(errors[1].message.contains("BadDate,2.00,2024-01-01"));
        assert!(errors[2].message.contains("TooShort,3.00"));
    }

    #[test]
    fn test_all_files_missing_still_reports_empty_summary() {
        let dir = TempDir::new().unwrap();

        let reporter = MemoryReporter::new();
        let engine = run_classic_merge(&dir, &reporter);

        assert!(engine.transactions().is_empty());
        assert_eq!(reporter.count(Severity::Warn, Channel::File), 4);

        let summary_messages: Vec<_> = reporter
            .notices()
            .into_iter()
            .filter(|n| n.channel == Channel::Transactions)
            .map(|n| n.message)
            .collect();
        assert_eq!(
            summary_messages,
            [
                "0 transactions imported",
                "total value: $0.00",
                "max value: $0.00",
            ]
        );
    }

    #[test]
    fn test_all_negative_amounts_report_zero_max() {
        let dir = TempDir::new().unwrap();
        write_input(
            &dir,
            "transactions1.csv",
            "RefundA,-10.00,01-01-2024\nRefundB,-5.00,02-01-2024\n",
        );

        let reporter = MemoryReporter::new();
        let engine = run_classic_merge(&dir, &reporter);

        let summary = engine.summary();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total, Decimal::new(-1500, 2));
        assert_eq!(summary.max, Decimal::ZERO);

        let notices = reporter.notices();
        assert!(notices
            .iter()
            .any(|n| n.message == "total value: $-15.00"));
        assert!(notices.iter().any(|n| n.message == "max value: $0.00"));
    }

    #[test]
    fn test_missing_file_between_present_files_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, "transactions1.csv", "First,1.00,01-01-2024\n");
        // transactions2.csv intentionally absent
        write_input(&dir, "transactions3.csv", "Second,2.00,02-01-2024\n");

        let reporter = MemoryReporter::new();
        let engine = run_classic_merge(&dir, &reporter);

        assert_eq!(engine.transactions().len(), 2);
        assert_eq!(reporter.count(Severity::Warn, Channel::File), 2);
        assert_eq!(reporter.count(Severity::Error, Channel::File), 0);
    }

    #[test]
    fn test_explicit_path_outside_defaults() {
        // The engine takes one path at a time and is unaware of any list.
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "other-name.csv", "Coffee,4.50,01-02-2023\n");

        let reporter = MemoryReporter::new();
        let mut engine = MergeEngine::new(&reporter);
        engine.ingest_file(&path);
        engine.ingest_file(Path::new("never-existed.csv"));

        assert_eq!(engine.transactions().len(), 1);
        assert_eq!(reporter.count(Severity::Warn, Channel::File), 1);
    }
}
