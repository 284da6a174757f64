use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};
use std::path::{Path, PathBuf};

use super::record::ConfigRecord;
use super::store::{Persistence, StoreError, next_revision};
use crate::paths;

/// `SQLite`-backed document store, one row per document.
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens the store at `$XDG_CONFIG_HOME/gtl/config.db`.
    pub fn open_default() -> anyhow::Result<Self> {
        let config_dir = paths::config_dir()?;
        Ok(Self::open(config_dir.join("config.db"))?)
    }

    /// Opens (creating if needed) the store at `db_path`.
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let store = Self { db_path };
        store.init_db()?;

        Ok(store)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn init_db(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY NOT NULL,
                rev TEXT NOT NULL,
                body TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.db_path)?)
    }
}

impl Persistence for SqliteStore {
    fn get(&self, id: &str) -> Result<Option<ConfigRecord>, StoreError> {
        let conn = self.connect()?;

        let row: Option<(String, String)> = conn
            .query_row(
                "SELECT rev, body FROM documents WHERE id = ?1",
                [id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((rev, body)) = row else {
            return Ok(None);
        };

        let mut record: ConfigRecord = serde_json::from_str(&body)?;
        record.rev = Some(rev);

        Ok(Some(record))
    }

    fn revision(&self, id: &str) -> Result<Option<String>, StoreError> {
        let conn = self.connect()?;

        Ok(conn
            .query_row("SELECT rev FROM documents WHERE id = ?1", [id], |row| {
                row.get(0)
            })
            .optional()?)
    }

    fn put(&self, record: &ConfigRecord) -> Result<String, StoreError> {
        let body = record.body()?;
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current: Option<String> = tx
            .query_row(
                "SELECT rev FROM documents WHERE id = ?1",
                [&record.id],
                |row| row.get(0),
            )
            .optional()?;

        if current != record.rev {
            return Err(StoreError::Conflict {
                id: record.id.clone(),
            });
        }

        let rev = next_revision(current.as_deref(), &body);

        tx.execute(
            "INSERT INTO documents (id, rev, body) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                rev = excluded.rev,
                body = excluded.body,
                updated_at = CURRENT_TIMESTAMP",
            params![record.id, rev, body],
        )?;
        tx.commit()?;

        Ok(rev)
    }
}
