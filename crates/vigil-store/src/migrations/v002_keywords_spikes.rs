//! v002: keyword_counters, spike_log.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS keyword_counters (
    user_id  TEXT NOT NULL,
    keyword  TEXT NOT NULL,
    weight   REAL NOT NULL DEFAULT 0,
    PRIMARY KEY (user_id, keyword)
);

CREATE INDEX IF NOT EXISTS idx_keyword_counters_weight ON keyword_counters(user_id, weight DESC);

CREATE TABLE IF NOT EXISTS spike_log (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id    TEXT NOT NULL,
    timestamp  TEXT NOT NULL,
    zv         REAL NOT NULL,
    za         REAL NOT NULL,
    r          REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_spike_log_user ON spike_log(user_id, id DESC);
";
