use rusqlite::{params, Connection};

use vigil_core::errors::VigilResult;
use vigil_core::KeywordWeight;

use crate::to_storage_err;

/// Add `amount` to a keyword's weight, creating the counter on first use.
pub fn increment(conn: &Connection, user_id: &str, keyword: &str, amount: f64) -> VigilResult<()> {
    conn.execute(
        "INSERT INTO keyword_counters (user_id, keyword, weight) VALUES (?1, ?2, ?3)
         ON CONFLICT(user_id, keyword) DO UPDATE SET weight = weight + excluded.weight",
        params![user_id, keyword, amount],
    )
    .map_err(|e| to_storage_err(format!("increment_keyword: {e}")))?;
    Ok(())
}

pub fn top(conn: &Connection, user_id: &str, limit: usize) -> VigilResult<Vec<KeywordWeight>> {
    let mut stmt = conn
        .prepare(
            "SELECT keyword, weight FROM keyword_counters
             WHERE user_id = ?1 ORDER BY weight DESC LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id, limit as i64], |row| {
            Ok(KeywordWeight::new(row.get::<_, String>(0)?, row.get(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
