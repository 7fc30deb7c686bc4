//! Response definitions
//!
//! Results of executing a [`Command`](super::Command).

use chrono::NaiveDate;

use crate::record::Record;

/// Outcome of a command
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Record appended at `index`
    Added { index: usize },

    /// Record at `index` replaced
    Edited { index: usize, previous: Record },

    /// Record at `index` removed
    Deleted { index: usize, removed: Record },

    /// No record at `index` (nothing changed)
    NotFound { index: usize },

    /// All records with their 1-based positions
    Listing { entries: Vec<(usize, Record)> },

    /// Records matching a date (possibly none)
    Matches { date: NaiveDate, records: Vec<Record> },

    /// Collection reordered by balance
    Sorted { count: usize },
}

impl Response {
    /// Whether the command found what it was addressed to
    pub fn is_not_found(&self) -> bool {
        matches!(self, Response::NotFound { .. })
    }
}
