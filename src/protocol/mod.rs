//! Protocol Module
//!
//! Typed requests and results exchanged between a front end (menu session,
//! CLI subcommand) and the [`Store`](crate::Store).
//!
//! ### Commands
//! - ADD       - Payload: record
//! - EDIT      - Payload: 0-based index + replacement record
//! - DELETE    - Payload: 0-based index
//! - LIST      - Payload: empty
//! - SEARCH    - Payload: date
//! - SORT      - Payload: empty
//!
//! ### Responses
//! Every command yields exactly one [`Response`]. An out-of-range index is
//! the explicit `NotFound` status, and an empty search is an empty `Matches`.

mod command;
mod response;

pub use command::{Command, CommandType};
pub use response::Response;
