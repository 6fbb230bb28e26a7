use rusqlite::{params, Connection, OptionalExtension};

use vigil_core::errors::VigilResult;
use vigil_core::{Axes, SeasonalityKind};

use crate::to_storage_err;

pub fn get_bucket(
    conn: &Connection,
    user_id: &str,
    kind: SeasonalityKind,
    period: u32,
) -> VigilResult<Option<Axes>> {
    conn.query_row(
        "SELECT v, a FROM seasonality_buckets WHERE user_id = ?1 AND kind = ?2 AND period = ?3",
        params![user_id, kind.as_str(), period],
        |row| Ok(Axes::new(row.get(0)?, row.get(1)?)),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn upsert_bucket(
    conn: &Connection,
    user_id: &str,
    kind: SeasonalityKind,
    period: u32,
    value: Axes,
) -> VigilResult<()> {
    conn.execute(
        "INSERT INTO seasonality_buckets (user_id, kind, period, v, a) VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(user_id, kind, period) DO UPDATE SET v = excluded.v, a = excluded.a",
        params![user_id, kind.as_str(), period, value.v, value.a],
    )
    .map_err(|e| to_storage_err(format!("upsert_bucket: {e}")))?;
    Ok(())
}
