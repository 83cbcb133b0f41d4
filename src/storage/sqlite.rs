use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::TasklistError;

use super::{migrations, KeyValueStorage};

/// Store location used when neither `--store` nor `TASKLIST_STORE` is given.
pub fn default_store_path() -> Result<PathBuf, TasklistError> {
    let dir = env::current_dir().map_err(|e| TasklistError::storage(e.to_string()))?;
    Ok(dir.join(".tasklist").join("tasklist.db"))
}

/// Key-value storage backed by a single SQLite table.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open the database at `path`, creating parent directories and the schema if needed.
    pub fn open(path: &Path) -> Result<Self, TasklistError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| TasklistError::storage(e.to_string()))?;
            }
        }
        let conn = Connection::open(path)?;
        configure_connection(&conn)?;
        migrations::run_migrations(&conn)?;
        debug!(path = %path.display(), "opened sqlite storage");
        Ok(Self { conn })
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, TasklistError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), TasklistError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }
}

fn configure_connection(conn: &Connection) -> Result<(), TasklistError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}
