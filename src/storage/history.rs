//! SQLite-backed history of completed calculations
//!
//! Each store operation opens its own short-lived connection (open, execute,
//! close on drop), serializing access without any shared handle. Records are
//! append-only; nothing ever updates or deletes a row.

use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by the history store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// One completed calculation as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRecord {
    /// Auto-incrementing row id
    pub id: i64,
    /// Rendered expression, e.g. "7.0 + 3.0"
    pub expression: String,
    /// String form of the result, e.g. "10.0"
    pub result: String,
    /// Creation time assigned by SQLite, in its text rendering
    pub timestamp: String,
}

/// History store bound to a database file path
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Create a store for the given database file. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The database file path this store writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    fn create_table(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS calculations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                expression TEXT,
                result TEXT,
                timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;
        Ok(())
    }

    /// Idempotently create the schema. Safe to call on every startup.
    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        Self::create_table(&conn)
    }

    /// Append one completed calculation. The timestamp is assigned by SQLite.
    pub fn append(&self, expression: &str, result: &str) -> Result<()> {
        let conn = self.connect()?;
        Self::create_table(&conn)?;
        conn.execute(
            "INSERT INTO calculations (expression, result) VALUES (?1, ?2)",
            params![expression, result],
        )?;
        Ok(())
    }

    /// Fetch the full history, most recent first.
    ///
    /// The id tiebreaker keeps ordering deterministic when several
    /// calculations land within the same one-second timestamp.
    pub fn fetch_all(&self) -> Result<Vec<CalculationRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, expression, result, timestamp FROM calculations
             ORDER BY timestamp DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CalculationRecord {
                id: row.get(0)?,
                expression: row.get(1)?,
                result: row.get(2)?,
                timestamp: row.get(3)?,
            })
        })?;
        let records = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// A store backed by a database file in a fresh temp directory
    fn temp_store() -> (TempDir, HistoryStore) {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("calculator.db"));
        (dir, store)
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let (_dir, store) = temp_store();
        store.ensure_schema().unwrap();
        store.ensure_schema().unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_append_creates_schema_on_demand() {
        let (_dir, store) = temp_store();
        // No ensure_schema call first.
        store.append("1.0 + 1.0", "2.0").unwrap();
        let records = store.fetch_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].expression, "1.0 + 1.0");
        assert_eq!(records[0].result, "2.0");
    }

    #[test]
    fn test_fetch_all_returns_most_recent_first() {
        let (_dir, store) = temp_store();
        store.append("1.0 + 1.0", "2.0").unwrap();
        store.append("2.0 + 2.0", "4.0").unwrap();
        store.append("3.0 + 3.0", "6.0").unwrap();

        let records = store.fetch_all().unwrap();
        assert_eq!(records.len(), 3);
        let expressions: Vec<&str> = records.iter().map(|r| r.expression.as_str()).collect();
        assert_eq!(expressions, vec!["3.0 + 3.0", "2.0 + 2.0", "1.0 + 1.0"]);
    }

    #[test]
    fn test_repeated_fetch_is_identical() {
        let (_dir, store) = temp_store();
        store.append("7.0 + 3.0", "10.0").unwrap();
        store.append("5.0 / 0.0", "0.0").unwrap();

        let first = store.fetch_all().unwrap();
        let second = store.fetch_all().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_records_carry_timestamps() {
        let (_dir, store) = temp_store();
        store.append("4.0 * 2.0", "8.0").unwrap();
        let records = store.fetch_all().unwrap();
        assert!(!records[0].timestamp.is_empty());
    }

    #[test]
    fn test_fetch_from_empty_store() {
        let (_dir, store) = temp_store();
        store.ensure_schema().unwrap();
        assert!(store.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_fails_when_directory_missing() {
        let store = HistoryStore::new("/nonexistent/dir/calculator.db");
        assert!(store.append("1.0 + 1.0", "2.0").is_err());
    }
}
