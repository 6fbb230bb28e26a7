use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use vigil_core::{
    Axes, AugmentedObservation, IStateStore, KeywordWeight, Observation, SeasonalityKind,
    SpikeRecord, TemporalState, VigilConfig, VigilError, VigilResult,
};
use vigil_observability::{observation_span, store_span};
use vigil_observability::{EngineMetrics, MetricsSnapshot, SideChannel};

use crate::auxiliary::{keywords, seasonality, spikes};
use crate::locks::UserLocks;
use crate::update::{self, UpdateParams};
use crate::validation;

/// Folds observations into per-user temporal state held in an
/// [`IStateStore`].
///
/// Safe to share across threads. Updates for one user are serialized
/// in-process; a deployment with several engine instances over one store
/// needs the store to serialize writers itself.
pub struct BehaviorEngine {
    store: Arc<dyn IStateStore>,
    config: VigilConfig,
    params: UpdateParams,
    locks: UserLocks,
    metrics: EngineMetrics,
}

impl BehaviorEngine {
    /// Build an engine over `store`. Fails if `config` does not validate.
    pub fn new(store: Arc<dyn IStateStore>, config: VigilConfig) -> VigilResult<Self> {
        config.validate()?;
        let params = UpdateParams::from(&config.engine);
        info!(
            critical_flags = params.critical_flags.len(),
            seasonality = config.seasonality.enabled,
            keywords = config.keywords.enabled,
            "behavior engine ready"
        );
        Ok(Self {
            store,
            config,
            params,
            locks: UserLocks::new(),
            metrics: EngineMetrics::new(),
        })
    }

    /// Build an engine with the compiled defaults.
    pub fn with_defaults(store: Arc<dyn IStateStore>) -> Self {
        let config = VigilConfig::default();
        Self {
            store,
            params: UpdateParams::from(&config.engine),
            config,
            locks: UserLocks::new(),
            metrics: EngineMetrics::new(),
        }
    }

    pub fn config(&self) -> &VigilConfig {
        &self.config
    }

    /// Fold one observation into the user's state and return it together
    /// with the committed state.
    ///
    /// Only `InvalidObservation` and `StoreUnavailable` are returned. A failed
    /// state read degrades to a cold start; seasonality, keyword, and spike
    /// failures are logged and counted.
    pub fn process_observation(
        &self,
        user_id: &str,
        observation: Observation,
        now: DateTime<Utc>,
    ) -> VigilResult<AugmentedObservation> {
        let _span = observation_span!(user_id).entered();

        if let Err(e) = validation::validate_observation(user_id, &observation) {
            self.metrics.record_rejected();
            debug!(error = %e, "observation rejected");
            return Err(e);
        }

        self.locks
            .with_user_lock(user_id, || self.apply(user_id, observation, now))
    }

    fn apply(
        &self,
        user_id: &str,
        observation: Observation,
        now: DateTime<Utc>,
    ) -> VigilResult<AugmentedObservation> {
        let prior = self.load_prior(user_id);
        let outcome = update::step(&prior, &observation, now, &self.params);

        // Finite inputs can still overflow the variance for extreme magnitudes.
        if let Err(details) = outcome.state.check_invariants() {
            self.metrics.record_rejected();
            return Err(VigilError::InvalidObservation {
                reason: format!("observation yields an invalid state: {details}"),
            });
        }

        {
            let _store = store_span!("save_state", user_id).entered();
            if let Err(e) = self.store.save_state(user_id, &outcome.state) {
                self.metrics.record_state_write_failure();
                warn!(user_id, error = %e, "state write failed");
                return Err(VigilError::store_unavailable("save_state", e));
            }
        }

        let state = outcome.state;
        debug!(
            user_id,
            n = state.n,
            regime = %state.regime,
            zv = state.z.v,
            za = state.z.a,
            risk_momentum = state.risk_momentum,
            elapsed_hours = outcome.factors.elapsed_hours,
            "state committed"
        );

        self.run_side_channels(user_id, &observation, outcome.blend, &state, now);
        self.metrics.record_processed(state.regime);

        Ok(AugmentedObservation {
            observation,
            temporal_after: state,
        })
    }

    /// Prior state for `user_id`, or defaults when there is none or it
    /// cannot be trusted.
    fn load_prior(&self, user_id: &str) -> TemporalState {
        let _store = store_span!("get_state", user_id).entered();
        match self.store.get_state(user_id) {
            Ok(Some(state)) => match state.check_invariants() {
                Ok(()) => state,
                Err(details) => {
                    self.metrics.record_read_fallback();
                    let e = VigilError::CorruptState {
                        user_id: user_id.to_string(),
                        details,
                    };
                    warn!(user_id, error = %e, "stored state rejected, starting cold");
                    TemporalState::default()
                }
            },
            Ok(None) => {
                self.metrics.record_cold_start();
                debug!(user_id, "no prior state, starting cold");
                TemporalState::default()
            }
            Err(e) => {
                self.metrics.record_read_fallback();
                warn!(user_id, error = %e, "state read failed, starting cold");
                TemporalState::default()
            }
        }
    }

    fn run_side_channels(
        &self,
        user_id: &str,
        observation: &Observation,
        blend: Axes,
        state: &TemporalState,
        now: DateTime<Utc>,
    ) {
        let store = self.store.as_ref();

        if self.config.seasonality.enabled {
            let failures = seasonality::record(
                store,
                user_id,
                observation,
                blend,
                now,
                &self.config.seasonality,
            );
            self.report(SideChannel::Seasonality, user_id, failures);
        }

        if self.config.keywords.enabled && !observation.event_keywords.is_empty() {
            let failures = keywords::record(
                store,
                user_id,
                &observation.event_keywords,
                self.config.keywords.increment,
            );
            self.report(SideChannel::Keywords, user_id, failures);
        }

        match spikes::record(store, user_id, state, now, &self.config.spikes) {
            Ok(Some(spike)) => {
                self.metrics.record_spike_logged();
                debug!(
                    user_id,
                    peak_z = spike.peak_z(),
                    risk_momentum = spike.risk_momentum,
                    "spike logged"
                );
            }
            Ok(None) => {}
            Err(e) => self.report(SideChannel::Spikes, user_id, vec![e]),
        }
    }

    fn report(&self, channel: SideChannel, user_id: &str, failures: Vec<VigilError>) {
        for e in failures {
            self.metrics.record_side_channel_failure(channel);
            warn!(user_id, channel = ?channel, error = %e, "side-channel write failed");
        }
    }

    /// Committed state for `user_id`, if any.
    pub fn current_state(&self, user_id: &str) -> VigilResult<Option<TemporalState>> {
        let _store = store_span!("get_state", user_id).entered();
        self.store
            .get_state(user_id)
            .map_err(|e| VigilError::store_unavailable("get_state", e))
    }

    /// Highest-weighted keywords. `None` uses `keywords.default_top_limit`.
    pub fn top_keywords(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> VigilResult<Vec<KeywordWeight>> {
        let limit = limit.unwrap_or(self.config.keywords.default_top_limit);
        let _store = store_span!("get_top_keywords", user_id).entered();
        self.store
            .get_top_keywords(user_id, limit)
            .map_err(|e| VigilError::store_unavailable("get_top_keywords", e))
    }

    /// Most recent spikes, newest first.
    pub fn recent_spikes(&self, user_id: &str, limit: usize) -> VigilResult<Vec<SpikeRecord>> {
        let _store = store_span!("get_recent_spikes", user_id).entered();
        self.store
            .get_recent_spikes(user_id, limit)
            .map_err(|e| VigilError::store_unavailable("get_recent_spikes", e))
    }

    /// Bucket average for one calendar period. Out-of-range periods have no
    /// bucket.
    pub fn seasonal_average(
        &self,
        user_id: &str,
        kind: SeasonalityKind,
        period: u32,
    ) -> VigilResult<Option<Axes>> {
        if period >= kind.period_count() {
            return Ok(None);
        }
        let _store = store_span!("get_seasonality", user_id).entered();
        self.store
            .get_seasonality(user_id, kind, period)
            .map_err(|e| VigilError::store_unavailable("get_seasonality", e))
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Users with an update running or waiting.
    pub fn active_locks(&self) -> usize {
        self.locks.len()
    }

    /// Drop lock entries for users with no update in flight.
    pub fn prune_idle_locks(&self) -> usize {
        let removed = self.locks.prune_idle();
        if removed > 0 {
            debug!(removed, remaining = self.locks.len(), "pruned idle user locks");
        }
        removed
    }
}
