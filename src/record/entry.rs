//! Record definition
//!
//! An immutable account entry. Edits replace whole records.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{BankError, Result};

use super::DELIMITER;

/// A single bank account entry
///
/// Identity is positional: a record has no key of its own and is addressed
/// by its index in the [`Store`](crate::Store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    last_name: String,
    first_name: String,
    last_transaction_date: NaiveDate,
    balance: Decimal,
}

impl Record {
    /// Create a record, rejecting names that contain the delimiter or a line break
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        last_transaction_date: NaiveDate,
        balance: Decimal,
    ) -> Result<Self> {
        let last_name = last_name.into();
        let first_name = first_name.into();

        Self::validate_name("last name", &last_name)?;
        Self::validate_name("first name", &first_name)?;

        Ok(Self::from_parts(last_name, first_name, last_transaction_date, balance))
    }

    /// Build without validation (decoded parts can never contain the delimiter)
    pub(crate) fn from_parts(
        last_name: String,
        first_name: String,
        last_transaction_date: NaiveDate,
        balance: Decimal,
    ) -> Self {
        Self {
            last_name,
            first_name,
            last_transaction_date,
            balance,
        }
    }

    /// Check a name field against the line format
    pub fn validate_name(field: &'static str, value: &str) -> Result<()> {
        if value.contains(DELIMITER) {
            return Err(BankError::InvalidField {
                field,
                reason: format!("must not contain '{}'", DELIMITER),
            });
        }
        if value.contains(['\n', '\r']) {
            return Err(BankError::InvalidField {
                field,
                reason: "must not contain line breaks".to_string(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_transaction_date(&self) -> NaiveDate {
        self.last_transaction_date
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}
