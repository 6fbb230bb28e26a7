use crate::errors::VigilResult;
use crate::models::{KeywordWeight, SeasonalityKind, SpikeRecord};
use crate::state::{Axes, TemporalState};

/// Key-value persistence contract the engine reads and writes through.
///
/// Implementations must make `save_state` atomic per user: a reader sees
/// either the previous blob or the new one, never a mix.
pub trait IStateStore: Send + Sync {
    // --- Temporal state ---
    fn get_state(&self, user_id: &str) -> VigilResult<Option<TemporalState>>;
    fn save_state(&self, user_id: &str, state: &TemporalState) -> VigilResult<()>;

    // --- Seasonality ---
    fn get_seasonality(
        &self,
        user_id: &str,
        kind: SeasonalityKind,
        period: u32,
    ) -> VigilResult<Option<Axes>>;
    fn save_seasonality(
        &self,
        user_id: &str,
        kind: SeasonalityKind,
        period: u32,
        value: Axes,
    ) -> VigilResult<()>;

    // --- Keyword memory ---
    fn increment_keyword(&self, user_id: &str, keyword: &str, amount: f64) -> VigilResult<()>;
    /// Highest-weighted keywords first. Tie order is unspecified.
    fn get_top_keywords(&self, user_id: &str, limit: usize) -> VigilResult<Vec<KeywordWeight>>;

    // --- Spike log ---
    fn log_spike(&self, user_id: &str, spike: &SpikeRecord) -> VigilResult<()>;
    /// Most recent spikes first.
    fn get_recent_spikes(&self, user_id: &str, limit: usize) -> VigilResult<Vec<SpikeRecord>>;
}
