//! Command definitions
//!
//! Represents requests from the menu or the command line.

use chrono::NaiveDate;

use crate::record::Record;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Add,
    Edit,
    Delete,
    List,
    SearchByDate,
    SortByBalance,
}

/// A parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a record
    Add { record: Record },

    /// Replace the record at a 0-based index
    Edit { index: usize, record: Record },

    /// Remove the record at a 0-based index
    Delete { index: usize },

    /// Show every record with its position
    List,

    /// Find records by exact last-transaction date
    SearchByDate { date: NaiveDate },

    /// Reorder by balance, highest first
    SortByBalance,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Add { .. } => CommandType::Add,
            Command::Edit { .. } => CommandType::Edit,
            Command::Delete { .. } => CommandType::Delete,
            Command::List => CommandType::List,
            Command::SearchByDate { .. } => CommandType::SearchByDate,
            Command::SortByBalance => CommandType::SortByBalance,
        }
    }

    /// Whether executing this command rewrites the data file
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Command::List | Command::SearchByDate { .. })
    }
}
