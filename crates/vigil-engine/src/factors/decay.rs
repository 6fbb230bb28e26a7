use chrono::{DateTime, Utc};

use vigil_core::constants::MIN_ELAPSED_HOURS;
use vigil_core::config::EngineConfig;
use vigil_core::{Axes, Observation};

/// Exponential time constants, in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeConstants {
    pub short: f64,
    pub long: f64,
    pub risk: f64,
}

impl From<&EngineConfig> for TimeConstants {
    fn from(config: &EngineConfig) -> Self {
        Self {
            short: config.short_tau_hours,
            long: config.long_tau_hours,
            risk: config.risk_tau_hours,
        }
    }
}

/// Per-update smoothing weights derived from elapsed time.
///
/// Each factor is `1 - e^(-dt/tau)`, strictly inside (0, 1) for any finite
/// `dt >= 1h`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayFactors {
    pub elapsed_hours: f64,
    /// Short-term factor.
    pub alpha: f64,
    /// Baseline, volatility and confidence factor.
    pub gamma: f64,
    /// Risk momentum factor.
    pub rho: f64,
}

impl DecayFactors {
    pub fn from_elapsed(elapsed_hours: f64, taus: &TimeConstants) -> Self {
        Self {
            elapsed_hours,
            alpha: decay_factor(elapsed_hours, taus.short),
            gamma: decay_factor(elapsed_hours, taus.long),
            rho: decay_factor(elapsed_hours, taus.risk),
        }
    }
}

/// `1 - e^(-dt/tau)`.
pub fn decay_factor(elapsed_hours: f64, tau_hours: f64) -> f64 {
    -(-elapsed_hours / tau_hours).exp_m1()
}

/// Hours since the previous observation, floored at one hour.
///
/// The first observation and out-of-order arrivals (`now` before `last_ts`)
/// both count as exactly one hour.
pub fn elapsed_hours(last_ts: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    match last_ts {
        None => MIN_ELAPSED_HOURS,
        Some(prev) => {
            let hours = (now - prev).num_milliseconds() as f64 / 3_600_000.0;
            hours.max(MIN_ELAPSED_HOURS)
        }
    }
}

/// Output of the smoothing stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothed {
    /// New short-term estimate.
    pub short_term: Axes,
    /// Confidence-weighted blend of the raw observation and `short_term`.
    pub blend: Axes,
    /// New long-term baseline.
    pub baseline: Axes,
}

/// Confidence weight pulling the blend toward the raw observation:
/// `0.5 + 0.5 * c`.
pub fn confidence_weight(confidence: f64) -> f64 {
    0.5 + 0.5 * confidence
}

/// Apply short-term and baseline smoothing to both axes independently.
pub fn smooth(
    prior_short: Axes,
    prior_baseline: Axes,
    observation: &Observation,
    factors: &DecayFactors,
) -> Smoothed {
    let w = confidence_weight(observation.confidence);
    let (sv, bv, mv) = smooth_axis(
        prior_short.v,
        prior_baseline.v,
        observation.valence,
        w,
        factors,
    );
    let (sa, ba, ma) = smooth_axis(
        prior_short.a,
        prior_baseline.a,
        observation.arousal,
        w,
        factors,
    );
    Smoothed {
        short_term: Axes::new(sv, sa),
        blend: Axes::new(bv, ba),
        baseline: Axes::new(mv, ma),
    }
}

fn smooth_axis(
    prior_short: f64,
    prior_baseline: f64,
    observed: f64,
    w: f64,
    factors: &DecayFactors,
) -> (f64, f64, f64) {
    let short = (1.0 - factors.alpha) * prior_short + factors.alpha * observed;
    let blend = w * observed + (1.0 - w) * short;
    let baseline = (1.0 - factors.gamma) * prior_baseline + factors.gamma * blend;
    (short, blend, baseline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn decay_factor_matches_closed_form() {
        let f = decay_factor(6.0, 12.0);
        assert!((f - (1.0 - (-0.5f64).exp())).abs() < 1e-12);
        assert!(decay_factor(1.0, 72.0) > 0.0);
        assert!(decay_factor(1.0e6, 12.0) <= 1.0);
    }

    #[test]
    fn elapsed_hours_is_floored() {
        let now = Utc::now();
        assert_eq!(elapsed_hours(None, now), 1.0);
        assert_eq!(elapsed_hours(Some(now - Duration::seconds(1)), now), 1.0);
        assert_eq!(elapsed_hours(Some(now + Duration::hours(3)), now), 1.0);
        assert!((elapsed_hours(Some(now - Duration::hours(6)), now) - 6.0).abs() < 1e-9);
    }
}
