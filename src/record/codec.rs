//! Record codec
//!
//! Encoding and decoding of the one-line text form.
//!
//! ```text
//! Smith,Jo,2024-01-01,100.00
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::Record;

/// Field separator
pub const DELIMITER: char = ',';

/// Fields per line
pub const FIELD_COUNT: usize = 4;

/// chrono format for the date field (`yyyy-MM-dd`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Failure to decode one stored line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {} fields, found {found}", FIELD_COUNT)]
    FieldCount { found: usize },

    #[error("invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("invalid balance '{value}': {reason}")]
    InvalidBalance { value: String, reason: String },

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

impl Record {
    /// Encode as `last,first,yyyy-MM-dd,balance`
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decode one line
    pub fn decode(line: &str) -> Result<Self, ParseError> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let parts: Vec<&str> = line.split(DELIMITER).collect();

        if parts.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount { found: parts.len() });
        }

        let date = parse_date(parts[2])?;
        let balance = parse_balance(parts[3])?;

        Ok(Record::from_parts(
            parts[0].to_string(),
            parts[1].to_string(),
            date,
            balance,
        ))
    }
}

/// Parse a `yyyy-MM-dd` date, ignoring surrounding whitespace
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| ParseError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a base-10 decimal literal, ignoring surrounding whitespace
///
/// Accepts `[+-]digits[.digits]` only. Literals with more precision than
/// `Decimal` holds are rejected rather than rounded.
pub(crate) fn parse_balance(value: &str) -> Result<Decimal, ParseError> {
    let invalid = |reason: String| ParseError::InvalidBalance {
        value: value.to_string(),
        reason,
    };

    let literal = value.trim();
    if !is_decimal_literal(literal) {
        return Err(invalid("expected [+-]digits[.digits]".to_string()));
    }

    Decimal::from_str_exact(literal).map_err(|e| invalid(e.to_string()))
}

/// `^[+-]?\d+(\.\d+)?$`
fn is_decimal_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}{d}{}",
            self.last_name(),
            self.first_name(),
            self.last_transaction_date().format(DATE_FORMAT),
            self.balance(),
            d = DELIMITER,
        )
    }
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Record::decode(s)
    }
}
