//! SqliteStore — SQLite WAL key-value table
//!
//! - WAL mode: readers never block the single writer
//! - One row per key, `INSERT .. ON CONFLICT DO UPDATE` for writes
//! - `updated_at_ms` kept for inspection, never read back by the core

use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::KeyValueStore;
use crate::error::{Result, ResultExt};

/// SQLite-backed [`KeyValueStore`]
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish_non_exhaustive()
    }
}

impl SqliteStore {
    /// Opens (or creates) the database in WAL mode.
    ///
    /// `":memory:"` opens a private in-memory database.
    ///
    /// ```no_run
    /// use warta_core::storage::SqliteStore;
    /// let store = SqliteStore::open(".warta/warta.db").unwrap();
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Creating database directory '{}'", parent.display()))?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Opening SQLite database '{}'", path.display()))?;

        // journal_mode returns a row, so it goes through pragma_update
        conn.pragma_update(None, "journal_mode", "WAL")
            .context("Enabling WAL journal mode")?;
        conn.execute_batch(
            "PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )
        .context("Configuring SQLite PRAGMAs")?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.migrate()?;
        tracing::debug!("SQLite store ready at {}", path.display());
        Ok(store)
    }

    /// Private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    /// Idempotent DDL
    fn migrate(&self) -> Result<()> {
        self.conn
            .lock()
            .execute_batch(
                "
            CREATE TABLE IF NOT EXISTS kv_entries (
                key           TEXT PRIMARY KEY,
                value         TEXT NOT NULL,
                updated_at_ms INTEGER NOT NULL
            );
            ",
            )
            .context("Migrating SQLite schema")?;
        Ok(())
    }

    /// Keys starting with `prefix`, sorted
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT key FROM kv_entries WHERE substr(key, 1, length(?1)) = ?1 ORDER BY key",
        )?;
        let rows = stmt
            .query_map(params![prefix], |row| row.get::<_, String>(0))
            .context("Query kv_entries by prefix")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("Collecting kv_entries keys")
    }

    /// Number of stored keys
    pub fn len(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .lock()
            .query_row("SELECT COUNT(*) FROM kv_entries", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .lock()
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("SELECT kv_entries '{key}'"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let updated_at_ms = chrono::Utc::now().timestamp_millis();
        self.conn
            .lock()
            .execute(
                "INSERT INTO kv_entries (key, value, updated_at_ms) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at_ms = excluded.updated_at_ms",
                params![key, value, updated_at_ms],
            )
            .with_context(|| format!("UPSERT kv_entries '{key}'"))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .lock()
            .execute("DELETE FROM kv_entries WHERE key = ?1", params![key])
            .with_context(|| format!("DELETE kv_entries '{key}'"))?;
        Ok(())
    }
}
