//! Configuration for bankdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a bankdb store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// The single backing file holding the whole dataset
    /// Format: one `last,first,yyyy-MM-dd,balance` line per record
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Save Configuration
    // -------------------------------------------------------------------------
    /// How the backing file is rewritten after a mutation
    pub save_strategy: SaveStrategy,

    /// fsync the written file before it becomes visible, and on unix the
    /// parent directory after an atomic rename. Elsewhere only the file
    /// contents are synced.
    pub sync_on_save: bool,
}

/// Strategy for rewriting the backing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStrategy {
    /// Write `<file>.tmp`, then rename over the target (readers never see a partial file)
    AtomicRename,

    /// Truncate and rewrite the target in place
    Overwrite,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("database.txt"),
            save_strategy: SaveStrategy::AtomicRename,
            sync_on_save: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing data file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the save strategy
    pub fn save_strategy(mut self, strategy: SaveStrategy) -> Self {
        self.config.save_strategy = strategy;
        self
    }

    /// Enable or disable fsync on save
    pub fn sync_on_save(mut self, sync: bool) -> Self {
        self.config.sync_on_save = sync;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
