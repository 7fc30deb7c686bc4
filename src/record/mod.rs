//! Record Module
//!
//! The data entity stored by bankdb, plus its line encoding.
//!
//! ## Responsibilities
//! - Hold one account entry (surname, first name, last transaction date, balance)
//! - Reject field values that would break the line format
//! - Encode to / decode from a single text line
//!
//! ## Line Format
//! ```text
//! ┌──────────┬───────────┬────────────┬─────────┐
//! │ lastName │ firstName │ yyyy-MM-dd │ balance │
//! └──────────┴───────────┴────────────┴─────────┘
//!        ','         ','          ','
//! ```
//! No header, no quoting. Name fields may not contain the delimiter.

mod entry;
mod codec;

pub use entry::Record;
pub use codec::{ParseError, DATE_FORMAT, DELIMITER, FIELD_COUNT};
pub(crate) use codec::{parse_balance, parse_date};
