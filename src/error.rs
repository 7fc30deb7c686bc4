//! Error types for bankdb
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::record::ParseError;

/// Result type alias using BankError
pub type Result<T> = std::result::Result<T, BankError>;

/// Unified error type for bankdb operations
#[derive(Debug, Error)]
pub enum BankError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Record not found: index {index} is outside 0..{len}")]
    NotFound { index: usize, len: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BankError {
    /// Whether this is the recoverable out-of-range condition from edit/delete
    pub fn is_not_found(&self) -> bool {
        matches!(self, BankError::NotFound { .. })
    }
}
