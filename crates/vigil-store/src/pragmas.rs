//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use vigil_core::config::StorageConfig;
use vigil_core::errors::VigilResult;

use crate::to_storage_err;

/// Apply journal, sync, and busy-timeout pragmas.
///
/// In-memory databases ignore WAL and stay in `memory` journal mode.
pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> VigilResult<()> {
    if config.wal_mode {
        conn.execute_batch("PRAGMA journal_mode = WAL;")
            .map_err(|e| to_storage_err(format!("journal_mode: {e}")))?;
    }
    conn.execute_batch("PRAGMA synchronous = NORMAL;")
        .map_err(|e| to_storage_err(e.to_string()))?;
    conn.busy_timeout(std::time::Duration::from_millis(u64::from(
        config.busy_timeout_ms,
    )))
    .map_err(|e| to_storage_err(format!("busy_timeout: {e}")))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> VigilResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
