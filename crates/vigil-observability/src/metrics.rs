//! Counters describing what the engine has done since it was built.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use vigil_core::Regime;

/// Best-effort facilities whose failures are counted but never surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideChannel {
    Seasonality,
    Keywords,
    Spikes,
}

/// Lock-free counters shared by every thread driving the engine.
#[derive(Debug, Default)]
pub struct EngineMetrics {
    observations_processed: AtomicU64,
    observations_rejected: AtomicU64,
    cold_starts: AtomicU64,
    read_fallbacks: AtomicU64,
    state_write_failures: AtomicU64,
    regime_normal: AtomicU64,
    regime_elevated: AtomicU64,
    regime_alert: AtomicU64,
    seasonality_failures: AtomicU64,
    keyword_failures: AtomicU64,
    spike_failures: AtomicU64,
    spikes_logged: AtomicU64,
}

/// Point-in-time copy of [`EngineMetrics`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub observations_processed: u64,
    pub observations_rejected: u64,
    pub cold_starts: u64,
    pub read_fallbacks: u64,
    pub state_write_failures: u64,
    pub regime_normal: u64,
    pub regime_elevated: u64,
    pub regime_alert: u64,
    pub seasonality_failures: u64,
    pub keyword_failures: u64,
    pub spike_failures: u64,
    pub spikes_logged: u64,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed update and the regime it produced.
    pub fn record_processed(&self, regime: Regime) {
        self.observations_processed.fetch_add(1, Ordering::Relaxed);
        let counter = match regime {
            Regime::Normal => &self.regime_normal,
            Regime::Elevated => &self.regime_elevated,
            Regime::Alert => &self.regime_alert,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.observations_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cold_start(&self) {
        self.cold_starts.fetch_add(1, Ordering::Relaxed);
    }

    /// A state read failed (or returned a corrupt blob) and defaults were used.
    pub fn record_read_fallback(&self) {
        self.read_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_state_write_failure(&self) {
        self.state_write_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_side_channel_failure(&self, channel: SideChannel) {
        let counter = match channel {
            SideChannel::Seasonality => &self.seasonality_failures,
            SideChannel::Keywords => &self.keyword_failures,
            SideChannel::Spikes => &self.spike_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_spike_logged(&self) {
        self.spikes_logged.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let load = |c: &AtomicU64| c.load(Ordering::Relaxed);
        MetricsSnapshot {
            observations_processed: load(&self.observations_processed),
            observations_rejected: load(&self.observations_rejected),
            cold_starts: load(&self.cold_starts),
            read_fallbacks: load(&self.read_fallbacks),
            state_write_failures: load(&self.state_write_failures),
            regime_normal: load(&self.regime_normal),
            regime_elevated: load(&self.regime_elevated),
            regime_alert: load(&self.regime_alert),
            seasonality_failures: load(&self.seasonality_failures),
            keyword_failures: load(&self.keyword_failures),
            spike_failures: load(&self.spike_failures),
            spikes_logged: load(&self.spikes_logged),
        }
    }
}

impl MetricsSnapshot {
    /// Serialize for export alongside health reports.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Share of committed updates that ended in `alert`.
    pub fn alert_rate(&self) -> f64 {
        if self.observations_processed == 0 {
            return 0.0;
        }
        self.regime_alert as f64 / self.observations_processed as f64
    }
}
