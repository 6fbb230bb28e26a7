//! Get/upsert of the per-user state blob.

use rusqlite::{params, Connection, OptionalExtension};

use vigil_core::errors::{StorageError, VigilResult};
use vigil_core::TemporalState;

use crate::to_storage_err;

pub fn get_state(conn: &Connection, user_id: &str) -> VigilResult<Option<TemporalState>> {
    let blob: Option<String> = conn
        .query_row(
            "SELECT state_json FROM temporal_states WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match blob {
        Some(json) => {
            let state = serde_json::from_str(&json).map_err(|e| StorageError::DecodeFailed {
                key: format!("temporal_states/{user_id}"),
                reason: e.to_string(),
            })?;
            Ok(Some(state))
        }
        None => Ok(None),
    }
}

/// Replace the user's blob in a single statement.
pub fn upsert_state(conn: &Connection, user_id: &str, state: &TemporalState) -> VigilResult<()> {
    let json = serde_json::to_string(state)?;
    conn.execute(
        "INSERT INTO temporal_states (user_id, state_json) VALUES (?1, ?2)
         ON CONFLICT(user_id) DO UPDATE SET
            state_json = excluded.state_json,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![user_id, json],
    )
    .map_err(|e| to_storage_err(format!("upsert_state: {e}")))?;
    Ok(())
}

pub fn count_states(conn: &Connection) -> VigilResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM temporal_states", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
