use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use vigil_core::errors::StorageError;
use vigil_core::{
    Axes, IStateStore, KeywordWeight, SeasonalityKind, SpikeRecord, TemporalState, VigilResult,
};
use vigil_store::InMemoryStateStore;

/// Store operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    ReadState,
    WriteState,
    Seasonality,
    Keywords,
    Spikes,
}

/// Wraps an [`InMemoryStateStore`] and fails selected operations.
#[derive(Default)]
pub struct FaultyStore {
    inner: InMemoryStateStore,
    read_state: AtomicBool,
    write_state: AtomicBool,
    seasonality: AtomicBool,
    keywords: AtomicBool,
    spikes: AtomicBool,
    injected: AtomicU64,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(faults: &[Fault]) -> Self {
        let store = Self::new();
        for fault in faults {
            store.fail(*fault);
        }
        store
    }

    pub fn fail(&self, fault: Fault) {
        self.flag(fault).store(true, Ordering::SeqCst);
    }

    pub fn heal(&self, fault: Fault) {
        self.flag(fault).store(false, Ordering::SeqCst);
    }

    /// The wrapped store, bypassing fault injection.
    pub fn inner(&self) -> &InMemoryStateStore {
        &self.inner
    }

    /// How many calls were failed so far.
    pub fn injected_failures(&self) -> u64 {
        self.injected.load(Ordering::SeqCst)
    }

    fn flag(&self, fault: Fault) -> &AtomicBool {
        match fault {
            Fault::ReadState => &self.read_state,
            Fault::WriteState => &self.write_state,
            Fault::Seasonality => &self.seasonality,
            Fault::Keywords => &self.keywords,
            Fault::Spikes => &self.spikes,
        }
    }

    fn check(&self, fault: Fault, operation: &str) -> VigilResult<()> {
        if self.flag(fault).load(Ordering::SeqCst) {
            self.injected.fetch_add(1, Ordering::SeqCst);
            return Err(StorageError::SqliteError {
                message: format!("injected failure in {operation}"),
            }
            .into());
        }
        Ok(())
    }
}

impl IStateStore for FaultyStore {
    fn get_state(&self, user_id: &str) -> VigilResult<Option<TemporalState>> {
        self.check(Fault::ReadState, "get_state")?;
        self.inner.get_state(user_id)
    }

    fn save_state(&self, user_id: &str, state: &TemporalState) -> VigilResult<()> {
        self.check(Fault::WriteState, "save_state")?;
        self.inner.save_state(user_id, state)
    }

    fn get_seasonality(
        &self,
        user_id: &str,
        kind: SeasonalityKind,
        period: u32,
    ) -> VigilResult<Option<Axes>> {
        self.check(Fault::Seasonality, "get_seasonality")?;
        self.inner.get_seasonality(user_id, kind, period)
    }

    fn save_seasonality(
        &self,
        user_id: &str,
        kind: SeasonalityKind,
        period: u32,
        value: Axes,
    ) -> VigilResult<()> {
        self.check(Fault::Seasonality, "save_seasonality")?;
        self.inner.save_seasonality(user_id, kind, period, value)
    }

    fn increment_keyword(&self, user_id: &str, keyword: &str, amount: f64) -> VigilResult<()> {
        self.check(Fault::Keywords, "increment_keyword")?;
        self.inner.increment_keyword(user_id, keyword, amount)
    }

    fn get_top_keywords(&self, user_id: &str, limit: usize) -> VigilResult<Vec<KeywordWeight>> {
        self.check(Fault::Keywords, "get_top_keywords")?;
        self.inner.get_top_keywords(user_id, limit)
    }

    fn log_spike(&self, user_id: &str, spike: &SpikeRecord) -> VigilResult<()> {
        self.check(Fault::Spikes, "log_spike")?;
        self.inner.log_spike(user_id, spike)
    }

    fn get_recent_spikes(&self, user_id: &str, limit: usize) -> VigilResult<Vec<SpikeRecord>> {
        self.check(Fault::Spikes, "get_recent_spikes")?;
        self.inner.get_recent_spikes(user_id, limit)
    }
}
