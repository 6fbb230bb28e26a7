use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Axes, Regime};
use crate::constants::SIGMA_FLOOR;

/// Default short-term and baseline point for a user never seen before.
pub const DEFAULT_CENTER: Axes = Axes::new(0.0, 0.3);
/// Default per-axis standard deviation.
pub const DEFAULT_SIGMA: Axes = Axes::new(0.05, 0.05);
/// Default risk momentum.
pub const DEFAULT_RISK_MOMENTUM: f64 = 0.1;
/// Default confidence momentum.
pub const DEFAULT_CONFIDENCE_MOMENTUM: f64 = 0.5;

/// Summary of a user's observation stream, persisted as a single blob.
///
/// Field names on the wire follow the short notation used in stored blobs
/// (`S`, `B`, `sigma`, `z`, `R`, `C`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalState {
    /// Short-term smoothed valence/arousal.
    #[serde(rename = "S")]
    pub short_term: Axes,
    /// Long-term baseline valence/arousal.
    #[serde(rename = "B")]
    pub baseline: Axes,
    /// Exponentially-weighted standard deviation per axis.
    pub sigma: Axes,
    /// Standardized deviation of `short_term` from the prior baseline.
    pub z: Axes,
    /// Risk momentum in [0, 1].
    #[serde(rename = "R")]
    pub risk_momentum: f64,
    /// Confidence momentum in [0, 1].
    #[serde(rename = "C")]
    pub confidence_momentum: f64,
    pub regime: Regime,
    /// Timestamp of the newest observation folded into this state.
    ///
    /// Not necessarily the observation that produced this state: one that
    /// arrives out of order is still folded in but leaves `last_ts` at the
    /// newer stored value, so it never moves backwards.
    #[serde(default)]
    pub last_ts: Option<DateTime<Utc>>,
    /// Number of observations folded into this state.
    #[serde(default)]
    pub n: u64,
}

impl Default for TemporalState {
    fn default() -> Self {
        Self {
            short_term: DEFAULT_CENTER,
            baseline: DEFAULT_CENTER,
            sigma: DEFAULT_SIGMA,
            z: Axes::default(),
            risk_momentum: DEFAULT_RISK_MOMENTUM,
            confidence_momentum: DEFAULT_CONFIDENCE_MOMENTUM,
            regime: Regime::Normal,
            last_ts: None,
            n: 0,
        }
    }
}

impl TemporalState {
    /// True before the first observation has been folded in.
    pub fn is_cold(&self) -> bool {
        self.n == 0 && self.last_ts.is_none()
    }

    /// Check the numeric invariants every committed state must satisfy.
    ///
    /// Returns a description of the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        for (name, axes) in [
            ("S", &self.short_term),
            ("B", &self.baseline),
            ("sigma", &self.sigma),
            ("z", &self.z),
        ] {
            if !axes.is_finite() {
                return Err(format!("{name} is not finite: {axes:?}"));
            }
        }
        if self.sigma.v < SIGMA_FLOOR || self.sigma.a < SIGMA_FLOOR {
            return Err(format!(
                "sigma below floor {SIGMA_FLOOR}: {:?}",
                self.sigma
            ));
        }
        if !(0.0..=1.0).contains(&self.risk_momentum) {
            return Err(format!("R out of [0, 1]: {}", self.risk_momentum));
        }
        if !(0.0..=1.0).contains(&self.confidence_momentum) {
            return Err(format!("C out of [0, 1]: {}", self.confidence_momentum));
        }
        Ok(())
    }
}
