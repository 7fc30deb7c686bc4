//! Store loader
//!
//! Reads the backing file at startup, skipping lines that fail to decode.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::Result;
use crate::record::{ParseError, Record};

/// Outcome of loading the backing file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines seen, including blank and malformed ones
    pub lines_read: u64,

    /// Records decoded and kept
    pub records_loaded: u64,

    /// Malformed lines that were dropped
    pub skipped: Vec<SkippedLine>,
}

/// A malformed line dropped during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the file
    pub line_number: u64,

    /// Raw content (lossy if not UTF-8)
    pub content: String,

    /// Why it failed to decode
    pub error: ParseError,
}

/// Load all records from `path`
///
/// A missing file yields an empty collection. Each malformed line is logged
/// and listed in the report; it never aborts the load. Only I/O failures
/// while reading are returned as errors.
pub fn load(path: &Path) -> Result<(Vec<Record>, LoadReport)> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No data file yet, starting empty");
            return Ok((Vec::new(), LoadReport::default()));
        }
        Err(e) => return Err(e.into()),
    };

    let reader = BufReader::new(file);
    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for (i, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line_number = i as u64 + 1;
        report.lines_read += 1;

        let decoded = match std::str::from_utf8(&raw) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => Record::decode(line),
            Err(_) => Err(ParseError::InvalidUtf8),
        };

        match decoded {
            Ok(record) => {
                records.push(record);
                report.records_loaded += 1;
            }
            Err(error) => {
                let content = String::from_utf8_lossy(&raw).trim_end_matches('\r').to_string();
                tracing::warn!(
                    path = %path.display(),
                    line = line_number,
                    %error,
                    "Skipping malformed record: {}",
                    content
                );
                report.skipped.push(SkippedLine {
                    line_number,
                    content,
                    error,
                });
            }
        }
    }

    tracing::info!(
        path = %path.display(),
        loaded = report.records_loaded,
        skipped = report.skipped.len(),
        "Loaded records"
    );

    Ok((records, report))
}
