//! SqliteStateStore: durable [`IStateStore`] on a single SQLite connection.

use std::path::Path;

use vigil_core::config::{SpikeConfig, StorageConfig};
use vigil_core::errors::VigilResult;
use vigil_core::{Axes, IStateStore, KeywordWeight, SeasonalityKind, SpikeRecord, TemporalState};

use crate::connection::SqliteConnection;
use crate::queries::{keyword_ops, seasonality_ops, spike_ops, state_ops};

pub struct SqliteStateStore {
    conn: SqliteConnection,
    max_spikes_per_user: usize,
}

impl SqliteStateStore {
    /// Open the database at `storage.db_path`.
    pub fn open(storage: &StorageConfig, spikes: &SpikeConfig) -> VigilResult<Self> {
        let conn = SqliteConnection::open(Path::new(&storage.db_path), storage)?;
        tracing::info!(db_path = %storage.db_path, "opened sqlite state store");
        Ok(Self {
            conn,
            max_spikes_per_user: spikes.max_per_user.max(1),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory(max_spikes_per_user: usize) -> VigilResult<Self> {
        Ok(Self {
            conn: SqliteConnection::open_in_memory()?,
            max_spikes_per_user: max_spikes_per_user.max(1),
        })
    }

    /// Number of users with a persisted state.
    pub fn user_count(&self) -> VigilResult<usize> {
        self.conn.with_conn(state_ops::count_states)
    }

    /// Number of spike records retained for a user.
    pub fn spike_count(&self, user_id: &str) -> VigilResult<usize> {
        self.conn.with_conn(|conn| spike_ops::count(conn, user_id))
    }
}

impl IStateStore for SqliteStateStore {
    fn get_state(&self, user_id: &str) -> VigilResult<Option<TemporalState>> {
        self.conn.with_conn(|conn| state_ops::get_state(conn, user_id))
    }

    fn save_state(&self, user_id: &str, state: &TemporalState) -> VigilResult<()> {
        self.conn
            .with_conn(|conn| state_ops::upsert_state(conn, user_id, state))
    }

    fn get_seasonality(
        &self,
        user_id: &str,
        kind: SeasonalityKind,
        period: u32,
    ) -> VigilResult<Option<Axes>> {
        self.conn
            .with_conn(|conn| seasonality_ops::get_bucket(conn, user_id, kind, period))
    }

    fn save_seasonality(
        &self,
        user_id: &str,
        kind: SeasonalityKind,
        period: u32,
        value: Axes,
    ) -> VigilResult<()> {
        self.conn
            .with_conn(|conn| seasonality_ops::upsert_bucket(conn, user_id, kind, period, value))
    }

    fn increment_keyword(&self, user_id: &str, keyword: &str, amount: f64) -> VigilResult<()> {
        self.conn
            .with_conn(|conn| keyword_ops::increment(conn, user_id, keyword, amount))
    }

    fn get_top_keywords(&self, user_id: &str, limit: usize) -> VigilResult<Vec<KeywordWeight>> {
        self.conn.with_conn(|conn| keyword_ops::top(conn, user_id, limit))
    }

    fn log_spike(&self, user_id: &str, spike: &SpikeRecord) -> VigilResult<()> {
        let retain = self.max_spikes_per_user;
        self.conn
            .with_conn(|conn| spike_ops::append(conn, user_id, spike, retain))
    }

    fn get_recent_spikes(&self, user_id: &str, limit: usize) -> VigilResult<Vec<SpikeRecord>> {
        self.conn.with_conn(|conn| spike_ops::recent(conn, user_id, limit))
    }
}
