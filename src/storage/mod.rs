//! Storage Layer
//!
//! Append-only persistence of completed calculations using SQLite.

pub mod history;

pub use history::{CalculationRecord, HistoryStore, StoreError};

use std::path::PathBuf;

/// Database file name, resolved against the process working directory.
pub const DB_FILE: &str = "calculator.db";

/// The fixed history database path. Not configurable by design.
pub fn default_db_path() -> PathBuf {
    PathBuf::from(DB_FILE)
}
