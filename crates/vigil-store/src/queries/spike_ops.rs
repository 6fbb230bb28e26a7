//! Append-only spike log with per-user retention.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use vigil_core::errors::{StorageError, VigilResult};
use vigil_core::SpikeRecord;

use crate::to_storage_err;

/// Append a spike and drop everything beyond the newest `retain` rows.
/// Both statements run in one transaction.
pub fn append(
    conn: &Connection,
    user_id: &str,
    spike: &SpikeRecord,
    retain: usize,
) -> VigilResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("log_spike begin: {e}")))?;

    tx.execute(
        "INSERT INTO spike_log (user_id, timestamp, zv, za, r) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user_id,
            spike.timestamp.to_rfc3339(),
            spike.zv,
            spike.za,
            spike.risk_momentum
        ],
    )
    .map_err(|e| to_storage_err(format!("log_spike insert: {e}")))?;

    tx.execute(
        "DELETE FROM spike_log WHERE user_id = ?1 AND id NOT IN (
            SELECT id FROM spike_log WHERE user_id = ?1 ORDER BY id DESC LIMIT ?2
         )",
        params![user_id, retain as i64],
    )
    .map_err(|e| to_storage_err(format!("log_spike trim: {e}")))?;

    tx.commit()
        .map_err(|e| to_storage_err(format!("log_spike commit: {e}")))?;
    Ok(())
}

/// Newest first.
pub fn recent(conn: &Connection, user_id: &str, limit: usize) -> VigilResult<Vec<SpikeRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT timestamp, zv, za, r FROM spike_log
             WHERE user_id = ?1 ORDER BY id DESC LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id, limit as i64], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, f64>(3)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut spikes = Vec::new();
    for row in rows {
        let (ts, zv, za, r) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let timestamp = DateTime::parse_from_rfc3339(&ts)
            .map_err(|e| StorageError::DecodeFailed {
                key: format!("spike_log/{user_id}"),
                reason: e.to_string(),
            })?
            .with_timezone(&Utc);
        spikes.push(SpikeRecord {
            timestamp,
            zv,
            za,
            risk_momentum: r,
        });
    }
    Ok(spikes)
}

pub fn count(conn: &Connection, user_id: &str) -> VigilResult<usize> {
    let n: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM spike_log WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}
