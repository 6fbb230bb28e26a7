//! v001: temporal_states, seasonality_buckets.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS temporal_states (
    user_id     TEXT PRIMARY KEY,
    state_json  TEXT NOT NULL,
    updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE TABLE IF NOT EXISTS seasonality_buckets (
    user_id  TEXT NOT NULL,
    kind     TEXT NOT NULL,
    period   INTEGER NOT NULL,
    v        REAL NOT NULL,
    a        REAL NOT NULL,
    PRIMARY KEY (user_id, kind, period)
);
";
