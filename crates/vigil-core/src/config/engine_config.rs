use serde::{Deserialize, Serialize};

use super::defaults;

/// Recurrence parameters: decay time constants, regime thresholds, and the
/// risk flags that force an alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Short-term smoothing time constant (hours).
    pub short_tau_hours: f64,
    /// Baseline, volatility and confidence time constant (hours).
    pub long_tau_hours: f64,
    /// Risk momentum time constant (hours).
    pub risk_tau_hours: f64,
    pub alert_risk_threshold: f64,
    pub alert_z_threshold: f64,
    pub elevated_risk_threshold: f64,
    pub elevated_z_threshold: f64,
    /// Risk flags that count as an explicit risk indicator.
    pub critical_flags: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            short_tau_hours: defaults::DEFAULT_SHORT_TAU_HOURS,
            long_tau_hours: defaults::DEFAULT_LONG_TAU_HOURS,
            risk_tau_hours: defaults::DEFAULT_RISK_TAU_HOURS,
            alert_risk_threshold: defaults::DEFAULT_ALERT_RISK_THRESHOLD,
            alert_z_threshold: defaults::DEFAULT_ALERT_Z_THRESHOLD,
            elevated_risk_threshold: defaults::DEFAULT_ELEVATED_RISK_THRESHOLD,
            elevated_z_threshold: defaults::DEFAULT_ELEVATED_Z_THRESHOLD,
            critical_flags: defaults::DEFAULT_CRITICAL_FLAGS
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}
