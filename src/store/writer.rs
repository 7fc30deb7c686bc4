//! Snapshot writer
//!
//! Rewrites the whole backing file from a slice of records.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::SaveStrategy;
use crate::error::{BankError, Result};
use crate::record::Record;

/// Writes full snapshots of the record collection
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    /// Target file
    path: PathBuf,
    /// Atomic rename or in-place overwrite
    strategy: SaveStrategy,
    /// fsync the file before it becomes visible, then its directory
    sync: bool,
}

impl SnapshotWriter {
    pub fn new(path: &Path, strategy: SaveStrategy, sync: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            strategy,
            sync,
        }
    }

    /// Replace the file contents with one encoded line per record
    pub fn write(&self, records: &[Record]) -> Result<()> {
        match self.strategy {
            SaveStrategy::AtomicRename => {
                let tmp = temp_path(&self.path)?;
                if let Err(e) = self.write_to(&tmp, records) {
                    let _ = fs::remove_file(&tmp);
                    return Err(e);
                }
                if let Err(e) = fs::rename(&tmp, &self.path) {
                    let _ = fs::remove_file(&tmp);
                    return Err(e.into());
                }
                if self.sync {
                    sync_parent_dir(&self.path)?;
                }
            }
            SaveStrategy::Overwrite => self.write_to(&self.path, records)?,
        }

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            strategy = ?self.strategy,
            "Saved snapshot"
        );

        Ok(())
    }

    fn write_to(&self, path: &Path, records: &[Record]) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        let mut writer = BufWriter::new(file);
        for record in records {
            writeln!(writer, "{}", record)?;
        }
        writer.flush()?;

        let file: File = writer.into_inner().map_err(|e| e.into_error())?;
        if self.sync {
            file.sync_all()?;
        }

        Ok(())
    }
}

/// Sibling temp file used for atomic saves: `database.txt` → `database.txt.tmp`
pub fn temp_path(path: &Path) -> Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        BankError::Config(format!("data file path has no file name: {}", path.display()))
    })?;

    let mut tmp_name = OsString::from(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

/// fsync the directory holding `path` so a completed rename survives a crash
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    File::open(parent)?.sync_all()?;
    Ok(())
}

/// Directories cannot be opened for syncing here; only file contents are synced
#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> Result<()> {
    Ok(())
}
