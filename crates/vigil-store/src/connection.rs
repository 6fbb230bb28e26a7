//! Single SQLite connection behind a mutex.
//! Every read and write is serialized through it.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use vigil_core::config::StorageConfig;
use vigil_core::errors::{StorageError, VigilError, VigilResult};

use crate::migrations::run_migrations;
use crate::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct SqliteConnection {
    conn: Mutex<Connection>,
}

impl SqliteConnection {
    /// Open (or create) the database file, apply pragmas, and migrate.
    pub fn open(path: &Path, config: &StorageConfig) -> VigilResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        Self::prepare(conn, config)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> VigilResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        let config = StorageConfig {
            wal_mode: false,
            ..StorageConfig::default()
        };
        Self::prepare(conn, &config)
    }

    fn prepare(conn: Connection, config: &StorageConfig) -> VigilResult<Self> {
        apply_pragmas(&conn, config)?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the connection and execute a closure with it.
    pub fn with_conn<F, T>(&self, f: F) -> VigilResult<T>
    where
        F: FnOnce(&Connection) -> VigilResult<T>,
    {
        let guard = self.conn.lock().map_err(|_| {
            VigilError::StorageError(StorageError::LockPoisoned {
                resource: "sqlite connection".to_string(),
            })
        })?;
        f(&guard)
    }
}
