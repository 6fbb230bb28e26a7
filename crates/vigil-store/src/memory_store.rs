//! InMemoryStateStore: concurrent per-user storage via DashMap.

use std::collections::{HashMap, VecDeque};

use dashmap::DashMap;

use vigil_core::config::defaults::DEFAULT_MAX_SPIKES_PER_USER;
use vigil_core::errors::VigilResult;
use vigil_core::models::keyword::rank_top;
use vigil_core::{Axes, IStateStore, KeywordWeight, SeasonalityKind, SpikeRecord, TemporalState};

type BucketKey = (String, SeasonalityKind, u32);

/// Thread-safe store keeping everything in process memory.
///
/// Each map shard is locked independently, so different users never contend.
pub struct InMemoryStateStore {
    states: DashMap<String, TemporalState>,
    seasonality: DashMap<BucketKey, Axes>,
    keywords: DashMap<String, HashMap<String, f64>>,
    spikes: DashMap<String, VecDeque<SpikeRecord>>,
    max_spikes_per_user: usize,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::with_spike_retention(DEFAULT_MAX_SPIKES_PER_USER)
    }

    /// Keep at most `max_spikes_per_user` spike records per user (oldest dropped).
    pub fn with_spike_retention(max_spikes_per_user: usize) -> Self {
        Self {
            states: DashMap::new(),
            seasonality: DashMap::new(),
            keywords: DashMap::new(),
            spikes: DashMap::new(),
            max_spikes_per_user: max_spikes_per_user.max(1),
        }
    }

    /// Number of users with a persisted state.
    pub fn user_count(&self) -> usize {
        self.states.len()
    }

    /// Number of spike records retained for a user.
    pub fn spike_count(&self, user_id: &str) -> usize {
        self.spikes.get(user_id).map(|s| s.len()).unwrap_or(0)
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IStateStore for InMemoryStateStore {
    fn get_state(&self, user_id: &str) -> VigilResult<Option<TemporalState>> {
        Ok(self.states.get(user_id).map(|s| s.clone()))
    }

    fn save_state(&self, user_id: &str, state: &TemporalState) -> VigilResult<()> {
        self.states.insert(user_id.to_string(), state.clone());
        Ok(())
    }

    fn get_seasonality(
        &self,
        user_id: &str,
        kind: SeasonalityKind,
        period: u32,
    ) -> VigilResult<Option<Axes>> {
        let key = (user_id.to_string(), kind, period);
        Ok(self.seasonality.get(&key).map(|b| *b))
    }

    fn save_seasonality(
        &self,
        user_id: &str,
        kind: SeasonalityKind,
        period: u32,
        value: Axes,
    ) -> VigilResult<()> {
        self.seasonality
            .insert((user_id.to_string(), kind, period), value);
        Ok(())
    }

    fn increment_keyword(&self, user_id: &str, keyword: &str, amount: f64) -> VigilResult<()> {
        let mut counters = self.keywords.entry(user_id.to_string()).or_default();
        *counters.entry(keyword.to_string()).or_insert(0.0) += amount;
        Ok(())
    }

    fn get_top_keywords(&self, user_id: &str, limit: usize) -> VigilResult<Vec<KeywordWeight>> {
        let weights = match self.keywords.get(user_id) {
            Some(counters) => counters
                .iter()
                .map(|(k, w)| KeywordWeight::new(k.clone(), *w))
                .collect(),
            None => Vec::new(),
        };
        Ok(rank_top(weights, limit))
    }

    fn log_spike(&self, user_id: &str, spike: &SpikeRecord) -> VigilResult<()> {
        let mut log = self.spikes.entry(user_id.to_string()).or_default();
        log.push_back(spike.clone());
        while log.len() > self.max_spikes_per_user {
            log.pop_front();
        }
        Ok(())
    }

    fn get_recent_spikes(&self, user_id: &str, limit: usize) -> VigilResult<Vec<SpikeRecord>> {
        Ok(self
            .spikes
            .get(user_id)
            .map(|log| log.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}
