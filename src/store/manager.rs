//! Store
//!
//! Owns the record sequence and keeps the backing file in step with it.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::config::Config;
use crate::error::{BankError, Result};
use crate::protocol::{Command, Response};
use crate::record::Record;

use super::{load, LoadReport, SnapshotWriter};

/// The record store
///
/// ## Persistence Model: full rewrite per mutation
///
/// - **Reads** (list/search): pure, served from memory
/// - **Writes** (add/edit/delete/sort): build the next sequence, write it as a
///   complete snapshot, then commit it to memory
///
/// The whole file is rewritten on every mutation. That is fine for a
/// personal ledger but grows linearly with the dataset.
pub struct Store {
    /// Store configuration
    config: Config,

    /// Records in display order (index 0 is shown as #1)
    records: Vec<Record>,

    /// Writes full snapshots to the data file
    writer: SnapshotWriter,

    /// What happened when the data file was loaded
    load_report: LoadReport,
}

impl Store {
    /// Open the store described by `config`
    ///
    /// On startup:
    /// 1. Create the parent directory if it doesn't exist
    /// 2. Load all parseable lines from the data file (missing file = empty)
    /// 3. Ready to serve commands
    pub fn open(config: Config) -> Result<Self> {
        if config.data_file.file_name().is_none() {
            return Err(BankError::Config(format!(
                "data file path has no file name: {}",
                config.data_file.display()
            )));
        }

        if let Some(parent) = config.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let (records, load_report) = load(&config.data_file)?;
        let writer = SnapshotWriter::new(
            &config.data_file,
            config.save_strategy,
            config.sync_on_save,
        );

        Ok(Self {
            config,
            records,
            writer,
            load_report,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data file
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_file(path).build())
    }

    /// Execute a command
    ///
    /// Out-of-range indices come back as `Response::NotFound`; only I/O and
    /// configuration failures are errors.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        let result = match command {
            Command::Add { record } => self.add(record).map(|index| Response::Added { index }),
            Command::Edit { index, record } => self
                .edit(index, record)
                .map(|previous| Response::Edited { index, previous }),
            Command::Delete { index } => self
                .delete(index)
                .map(|removed| Response::Deleted { index, removed }),
            Command::List => Ok(Response::Listing {
                entries: self
                    .list()
                    .into_iter()
                    .map(|(position, record)| (position, record.clone()))
                    .collect(),
            }),
            Command::SearchByDate { date } => Ok(Response::Matches {
                date,
                records: self.search_by_date(date).into_iter().cloned().collect(),
            }),
            Command::SortByBalance => self
                .sort_by_balance()
                .map(|()| Response::Sorted { count: self.records.len() }),
        };

        match result {
            Err(BankError::NotFound { index, .. }) => Ok(Response::NotFound { index }),
            other => other,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a record and save
    ///
    /// Returns the 0-based index it landed at.
    pub fn add(&mut self, record: Record) -> Result<usize> {
        let mut next = self.records.clone();
        next.push(record);
        self.commit(next)?;

        let index = self.records.len() - 1;
        tracing::info!(index, "Added record");
        Ok(index)
    }

    /// Replace the record at `index` and save
    ///
    /// Returns the record that was replaced.
    pub fn edit(&mut self, index: usize, updated: Record) -> Result<Record> {
        self.check_index(index)?;

        let mut next = self.records.clone();
        let previous = std::mem::replace(&mut next[index], updated);
        self.commit(next)?;

        tracing::info!(index, "Edited record");
        Ok(previous)
    }

    /// Remove the record at `index` and save
    ///
    /// Later records shift down by one. Returns the removed record.
    pub fn delete(&mut self, index: usize) -> Result<Record> {
        self.check_index(index)?;

        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        tracing::info!(index, "Deleted record");
        Ok(removed)
    }

    /// Reorder by balance, highest first, and save
    ///
    /// Stable: equal balances keep their relative order.
    pub fn sort_by_balance(&mut self) -> Result<()> {
        let mut next = self.records.clone();
        next.sort_by(|a, b| b.balance().cmp(&a.balance()));
        self.commit(next)?;

        tracing::info!(records = self.records.len(), "Sorted records by balance");
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All records with their 1-based display position
    pub fn list(&self) -> Vec<(usize, &Record)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (i + 1, record))
            .collect()
    }

    /// Records whose last transaction happened exactly on `date`
    pub fn search_by_date(&self, date: NaiveDate) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.last_transaction_date() == date)
            .collect()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the record at a 0-based index
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// All records in current order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get the backing data file path
    pub fn path(&self) -> &Path {
        &self.config.data_file
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the report produced when the data file was loaded
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            tracing::debug!(index, len = self.records.len(), "Index out of range");
            Err(BankError::NotFound {
                index,
                len: self.records.len(),
            })
        }
    }

    /// Persist `next`, then make it the live sequence
    fn commit(&mut self, next: Vec<Record>) -> Result<()> {
        self.writer.write(&next)?;
        self.records = next;
        Ok(())
    }
}
