//! Store Module
//!
//! In-memory record collection backed by a single text file.
//!
//! ## Responsibilities
//! - Load every parseable line at startup (bad lines are reported and dropped)
//! - Keep records in insertion order until an explicit sort
//! - Rewrite the whole file after every mutation
//! - Linear search by transaction date, stable sort by balance
//!
//! ## Durability Contract
//! After a mutating call returns `Ok`, the backing file holds exactly the
//! in-memory sequence, one encoded record per line. A failed save leaves the
//! in-memory sequence untouched.

mod loader;
mod writer;
mod manager;

pub use loader::{load, LoadReport, SkippedLine};
pub use writer::{temp_path, SnapshotWriter};
pub use manager::Store;
