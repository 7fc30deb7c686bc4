//! # bankdb
//!
//! A single-user record manager for bank account entries with:
//! - Flat, comma-delimited text persistence (one record per line)
//! - Full-file rewrite after every mutation (atomic rename by default)
//! - Tolerant loading that skips and reports malformed lines
//! - An interactive menu and one-shot CLI commands
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Menu Session / CLI Subcommands                  │
//! │                 (prompts, rendering)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Store::execute                             │
//! │          (in-memory Vec<Record>, positional)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Loader    │          │   Writer    │
//!   │ (startup)   │          │ (per save)  │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          └──────────┬─────────────┘
//!                     ▼
//!             ┌───────────────┐
//!             │ database.txt  │
//!             └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod protocol;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BankError, Result};
pub use config::{Config, SaveStrategy};
pub use record::{ParseError, Record};
pub use store::{LoadReport, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of bankdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
