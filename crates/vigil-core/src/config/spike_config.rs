use serde::{Deserialize, Serialize};

use super::defaults;

/// Spike logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpikeConfig {
    /// A spike is logged when max(|z.v|, |z.a|) reaches this value.
    pub z_threshold: f64,
    /// ... or when risk momentum reaches this value.
    pub risk_threshold: f64,
    /// Retention bound applied by the store backends.
    pub max_per_user: usize,
}

impl Default for SpikeConfig {
    fn default() -> Self {
        Self {
            z_threshold: defaults::DEFAULT_SPIKE_Z_THRESHOLD,
            risk_threshold: defaults::DEFAULT_SPIKE_RISK_THRESHOLD,
            max_per_user: defaults::DEFAULT_MAX_SPIKES_PER_USER,
        }
    }
}
