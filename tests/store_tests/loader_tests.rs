//! Tests for the Store loader
//!
//! These tests verify:
//! - Missing file loads as empty
//! - Valid lines load in order
//! - Malformed lines are skipped and reported, valid ones kept in order
//! - Blank lines and CRLF endings are tolerated

use std::fs;
use std::path::PathBuf;

use bankdb::record::ParseError;
use bankdb::store::load;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("database.txt");
    (temp_dir, path)
}

fn names(records: &[bankdb::Record]) -> Vec<&str> {
    records.iter().map(|r| r.last_name()).collect()
}

// =============================================================================
// Basic Load Tests
// =============================================================================

#[test]
fn test_load_missing_file() {
    let (_temp, path) = setup_temp_file();

    let (records, report) = load(&path).unwrap();

    assert!(records.is_empty());
    assert_eq!(report.lines_read, 0);
    assert_eq!(report.records_loaded, 0);
    assert!(report.skipped.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_load_empty_file() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "").unwrap();

    let (records, report) = load(&path).unwrap();

    assert!(records.is_empty());
    assert_eq!(report.lines_read, 0);
}

#[test]
fn test_load_valid_lines_in_order() {
    let (_temp, path) = setup_temp_file();
    fs::write(
        &path,
        "Smith,Jo,2024-01-01,100.00\nLee,An,2024-01-01,250.50\nKim,Bo,2023-05-06,7\n",
    )
    .unwrap();

    let (records, report) = load(&path).unwrap();

    assert_eq!(names(&records), vec!["Smith", "Lee", "Kim"]);
    assert_eq!(report.lines_read, 3);
    assert_eq!(report.records_loaded, 3);
}

#[test]
fn test_load_without_trailing_newline() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "Smith,Jo,2024-01-01,100.00\nLee,An,2024-01-01,250.50").unwrap();

    let (records, _) = load(&path).unwrap();

    assert_eq!(names(&records), vec!["Smith", "Lee"]);
}

#[test]
fn test_load_crlf_line_endings() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "Smith,Jo,2024-01-01,100.00\r\nLee,An,2024-01-01,250.50\r\n").unwrap();

    let (records, report) = load(&path).unwrap();

    assert_eq!(names(&records), vec!["Smith", "Lee"]);
    assert!(report.skipped.is_empty());
}

// =============================================================================
// Malformed Line Tests
// =============================================================================

#[test]
fn test_load_skips_malformed_lines_preserving_order() {
    let (_temp, path) = setup_temp_file();
    fs::write(
        &path,
        "Smith,Jo,2024-01-01,100.00\n\
         garbage\n\
         Lee,An,2024-01-01,250.50\n\
         Bad,Date,2024-13-01,1\n\
         Bad,Balance,2024-01-01,abc\n\
         Kim,Bo,2023-05-06,7\n",
    )
    .unwrap();

    let (records, report) = load(&path).unwrap();

    assert_eq!(names(&records), vec!["Smith", "Lee", "Kim"]);
    assert_eq!(report.lines_read, 6);
    assert_eq!(report.records_loaded, 3);
    assert_eq!(report.skipped.len(), 3);

    let skipped_lines: Vec<u64> = report.skipped.iter().map(|s| s.line_number).collect();
    assert_eq!(skipped_lines, vec![2, 4, 5]);

    assert_eq!(report.skipped[0].content, "garbage");
    assert_eq!(report.skipped[0].error, ParseError::FieldCount { found: 1 });
    assert!(matches!(report.skipped[1].error, ParseError::InvalidDate { .. }));
    assert!(matches!(report.skipped[2].error, ParseError::InvalidBalance { .. }));
}

#[test]
fn test_load_all_lines_malformed() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "a\nb,c\nd,e,f\n").unwrap();

    let (records, report) = load(&path).unwrap();

    assert!(records.is_empty());
    assert_eq!(report.skipped.len(), 3);
}

#[test]
fn test_load_skips_blank_lines_silently() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "Smith,Jo,2024-01-01,100.00\n\n   \nLee,An,2024-01-01,250.50\n").unwrap();

    let (records, report) = load(&path).unwrap();

    assert_eq!(names(&records), vec!["Smith", "Lee"]);
    assert_eq!(report.lines_read, 4);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_load_invalid_utf8_line_is_skipped() {
    let (_temp, path) = setup_temp_file();
    let mut bytes = b"Smith,Jo,2024-01-01,100.00\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b',', b'x', b'\n']);
    bytes.extend_from_slice(b"Lee,An,2024-01-01,250.50\n");
    fs::write(&path, bytes).unwrap();

    let (records, report) = load(&path).unwrap();

    assert_eq!(names(&records), vec!["Smith", "Lee"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line_number, 2);
    assert_eq!(report.skipped[0].error, ParseError::InvalidUtf8);
}

#[test]
fn test_load_record_with_extra_comma_is_skipped() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "Smith, Jr,Jo,2024-01-01,100.00\n").unwrap();

    let (records, report) = load(&path).unwrap();

    assert!(records.is_empty());
    assert_eq!(report.skipped[0].error, ParseError::FieldCount { found: 5 });
}
