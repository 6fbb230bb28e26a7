//! Schema migrations using PRAGMA user_version.

pub mod v001_initial;
pub mod v002_keywords_spikes;

use rusqlite::Connection;

use vigil_core::errors::{StorageError, VigilResult};

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> VigilResult<()> {
    let current = current_version(conn)?;

    let migrations: &[(&str, u32)] = &[
        (v001_initial::MIGRATION_SQL, 1),
        (v002_keywords_spikes::MIGRATION_SQL, 2),
    ];

    for (sql, version) in migrations {
        if current < *version {
            conn.execute_batch(sql)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            tracing::info!(version = version, "applied migration");
        }
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> VigilResult<u32> {
    let version = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(version)
}

/// Highest version this build knows how to apply.
pub const LATEST_VERSION: u32 = 2;
