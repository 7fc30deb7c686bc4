//! Tests for SnapshotWriter
//!
//! These tests verify:
//! - Snapshots contain one encoded line per record, in order
//! - Atomic saves leave no temp file behind
//! - Overwrite saves replace existing contents
//! - Temp path derivation

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use bankdb::store::{temp_path, SnapshotWriter};
use bankdb::{BankError, Record, SaveStrategy};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("database.txt");
    (temp_dir, path)
}

fn record(last: &str, balance: &str) -> Record {
    Record::new(
        last,
        "Jo",
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        Decimal::from_str(balance).unwrap(),
    )
    .unwrap()
}

// =============================================================================
// Write Tests
// =============================================================================

#[test]
fn test_atomic_write_contents() {
    let (_temp, path) = setup_temp_file();
    let writer = SnapshotWriter::new(&path, SaveStrategy::AtomicRename, true);

    writer
        .write(&[record("Smith", "100.00"), record("Lee", "250.50")])
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "Smith,Jo,2024-01-01,100.00\nLee,Jo,2024-01-01,250.50\n");
}

#[test]
fn test_atomic_write_leaves_no_temp_file() {
    let (_temp, path) = setup_temp_file();
    let writer = SnapshotWriter::new(&path, SaveStrategy::AtomicRename, false);

    writer.write(&[record("Smith", "1")]).unwrap();

    assert!(path.exists());
    assert!(!temp_path(&path).unwrap().exists());
}

#[test]
fn test_atomic_write_replaces_longer_file() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "old line one\nold line two\nold line three\n").unwrap();
    let writer = SnapshotWriter::new(&path, SaveStrategy::AtomicRename, false);

    writer.write(&[record("Smith", "1")]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Smith,Jo,2024-01-01,1\n");
}

#[test]
fn test_overwrite_replaces_longer_file() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "old line one\nold line two\nold line three\n").unwrap();
    let writer = SnapshotWriter::new(&path, SaveStrategy::Overwrite, false);

    writer.write(&[record("Smith", "1")]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Smith,Jo,2024-01-01,1\n");
    assert!(!temp_path(&path).unwrap().exists());
}

#[test]
fn test_write_empty_snapshot() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "Smith,Jo,2024-01-01,1\n").unwrap();
    let writer = SnapshotWriter::new(&path, SaveStrategy::AtomicRename, false);

    writer.write(&[]).unwrap();

    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_synced_atomic_write_replaces_file() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "old\n").unwrap();
    let writer = SnapshotWriter::new(&path, SaveStrategy::AtomicRename, true);

    writer.write(&[record("Lee", "2")]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Lee,Jo,2024-01-01,2\n");
    assert!(!temp_path(&path).unwrap().exists());
}

#[test]
fn test_failed_rename_removes_temp_file() {
    let (_temp, path) = setup_temp_file();
    fs::create_dir(&path).unwrap();
    fs::write(path.join("occupant"), "x").unwrap();
    let writer = SnapshotWriter::new(&path, SaveStrategy::AtomicRename, false);

    let err = writer.write(&[record("Smith", "1")]).unwrap_err();

    assert!(matches!(err, BankError::Io(_)));
    assert!(path.is_dir());
    assert!(!temp_path(&path).unwrap().exists());
}

#[test]
fn test_write_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("database.txt");
    let writer = SnapshotWriter::new(&path, SaveStrategy::AtomicRename, false);

    let err = writer.write(&[record("Smith", "1")]).unwrap_err();

    assert!(matches!(err, BankError::Io(_)));
}

// =============================================================================
// Temp Path Tests
// =============================================================================

#[test]
fn test_temp_path_is_sibling() {
    let tmp = temp_path(Path::new("/data/database.txt")).unwrap();

    assert_eq!(tmp, PathBuf::from("/data/database.txt.tmp"));
}

#[test]
fn test_temp_path_relative() {
    let tmp = temp_path(Path::new("database.txt")).unwrap();

    assert_eq!(tmp, PathBuf::from("database.txt.tmp"));
}

#[test]
fn test_temp_path_without_file_name() {
    let err = temp_path(Path::new("/")).unwrap_err();

    assert!(matches!(err, BankError::Config(_)));
}
