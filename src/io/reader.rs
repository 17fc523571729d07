//! Purchase file reader with iterator interface
//!
//! Provides a streaming iterator over purchase records from one delimited
//! transactions file. Delegates line-format concerns to the line_format
//! module.
//!
//! # Design
//!
//! The PurchaseReader wraps a csv::Reader configured to match the naive
//! split-on-comma format: no header row, no quoting (quote characters are
//! literal text), flexible field counts. It reads records one at a time
//! without loading the whole file into memory.
//!
//! # Error Handling
//!
//! - Open failures are returned from [`PurchaseReader::open`], with a
//!   missing file distinguished from other I/O faults.
//! - Per-line defects are yielded as `Err(MergeError::MalformedLine)`
//!   items carrying the raw line text; iteration continues afterwards.
//! - An I/O fault mid-file is yielded as `Err(MergeError::Io)`; the caller
//!   is expected to stop reading that file.
//!
//! The underlying file handle is released when the reader is dropped,
//! which happens on every exit path of the caller.

use crate::io::line_format::{convert_record, RawRecord, FIELD_COUNT};
use crate::types::{MergeError, ParseError, Purchase};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Streaming reader over one transactions file
///
/// Implements [`Iterator`], yielding `Result<Purchase, MergeError>` per
/// line so the caller decides the continue-vs-abort policy.
///
/// # Examples
///
/// ```no_run
/// use transaction_merger::io::reader::PurchaseReader;
/// use std::path::Path;
///
/// let reader = PurchaseReader::open(Path::new("transactions1.csv")).unwrap();
/// for result in reader {
///     match result {
///         Ok(purchase) => println!("imported {}", purchase),
///         Err(e) => eprintln!("{}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct PurchaseReader {
    path: PathBuf,
    reader: csv::Reader<File>,
}

impl PurchaseReader {
    /// Open a transactions file for streaming iteration
    ///
    /// The reader is configured to match the line format exactly:
    /// - no header row (line one is data)
    /// - quoting disabled, so quote characters are ordinary text and a
    ///   comma always splits
    /// - flexible field counts, so short and long lines reach the
    ///   conversion step instead of aborting the file
    ///
    /// # Returns
    ///
    /// * `Ok(PurchaseReader)` if the file opened successfully
    /// * `Err(MergeError::FileNotFound)` if the path does not exist
    /// * `Err(MergeError::Io)` for any other open failure
    pub fn open(path: &Path) -> Result<Self, MergeError> {
        let file = File::open(path).map_err(|e| MergeError::from_open_error(path, e))?;

        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(file);

        Ok(Self {
            path: path.to_path_buf(),
            reader,
        })
    }

    /// Path this reader was opened on
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for PurchaseReader {
    type Item = Result<Purchase, MergeError>;

    /// Get the next purchase record from the file
    ///
    /// Reads one raw record, reconstructs the raw line text for error
    /// context, and converts it to a [`Purchase`]. Fields beyond the
    /// third are ignored; a record with fewer than three fields yields a
    /// field-count defect.
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Purchase))` - successfully parsed record
    /// * `Some(Err(MergeError::MalformedLine))` - per-line defect, safe to
    ///   continue iterating
    /// * `Some(Err(MergeError::Io))` - I/O fault, the caller should stop
    /// * `None` - end of file
    fn next(&mut self) -> Option<Self::Item> {
        let mut record = csv::StringRecord::new();

        match self.reader.read_record(&mut record) {
            Ok(false) => None,
            Ok(true) => {
                let raw = record.iter().collect::<Vec<_>>().join(",");
                Some(parse_record(&mut record, &raw))
            }
            Err(e) => {
                if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                    Some(Err(MergeError::Io {
                        path: self.path.display().to_string(),
                        message: e.to_string(),
                    }))
                } else {
                    // Record-level defect (e.g. invalid UTF-8): skip the
                    // line, keep reading.
                    Some(Err(MergeError::MalformedLine {
                        raw: String::new(),
                        source: ParseError::Syntax {
                            message: e.to_string(),
                        },
                    }))
                }
            }
        }
    }
}

/// Convert one raw record into a purchase, wrapping failures with the raw
/// line text
fn parse_record(record: &mut csv::StringRecord, raw: &str) -> Result<Purchase, MergeError> {
    if record.len() < FIELD_COUNT {
        return Err(MergeError::malformed_line(
            raw,
            ParseError::NotEnoughFields {
                found: record.len(),
            },
        ));
    }

    // Extra fields are ignored, matching the fixed positional access.
    record.truncate(FIELD_COUNT);

    let raw_record: RawRecord = record.deserialize(None).map_err(|e| {
        MergeError::malformed_line(
            raw,
            ParseError::Syntax {
                message: e.to_string(),
            },
        )
    })?;

    convert_record(raw_record).map_err(|source| MergeError::malformed_line(raw, source))
}
