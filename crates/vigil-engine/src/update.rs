//! One application of the recurrence: prior state + observation + clock
//! in, next state out. Pure; no I/O.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use vigil_core::config::EngineConfig;
use vigil_core::{Axes, Observation, TemporalState};

use crate::factors::{decay, risk, volatility};
use crate::factors::{DecayFactors, RegimeThresholds, TimeConstants};

/// Everything the recurrence needs from configuration, resolved once.
#[derive(Debug, Clone)]
pub struct UpdateParams {
    pub taus: TimeConstants,
    pub thresholds: RegimeThresholds,
    /// Normalized critical risk flags.
    pub critical_flags: HashSet<String>,
}

impl From<&EngineConfig> for UpdateParams {
    fn from(config: &EngineConfig) -> Self {
        Self {
            taus: TimeConstants::from(config),
            thresholds: RegimeThresholds::from(config),
            critical_flags: config
                .critical_flags
                .iter()
                .map(|f| risk::normalize_flag(f))
                .filter(|f| !f.is_empty())
                .collect(),
        }
    }
}

impl Default for UpdateParams {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

/// The next state plus the intermediate signals that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub state: TemporalState,
    pub factors: DecayFactors,
    /// Confidence-weighted blend of the observation and the new short-term
    /// estimate. Seasonality buckets move toward this.
    pub blend: Axes,
    pub tension_gap: f64,
    pub risk_indicator: f64,
    pub escalating_risk: f64,
}

/// Fold one observation into `prior`.
///
/// The observation must already be validated. `last_ts` never moves
/// backwards: an observation older than the stored one is folded in with the
/// minimum elapsed time and leaves `last_ts` unchanged.
pub fn step(
    prior: &TemporalState,
    observation: &Observation,
    now: DateTime<Utc>,
    params: &UpdateParams,
) -> StepOutcome {
    let elapsed = decay::elapsed_hours(prior.last_ts, now);
    let factors = DecayFactors::from_elapsed(elapsed, &params.taus);

    let smoothed = decay::smooth(prior.short_term, prior.baseline, observation, &factors);
    let sigma = volatility::update_sigma(
        observation.point(),
        smoothed.baseline,
        prior.sigma,
        factors.gamma,
    );
    let z = volatility::z_scores(smoothed.short_term, prior.baseline, sigma);

    let tension_gap = risk::tension_gap(observation.point(), observation.prior_composite_state);
    let risk_indicator = risk::risk_indicator(&observation.risk_flags, &params.critical_flags);
    let escalating_risk = risk::escalating_risk(
        observation.arousal,
        prior.baseline.a,
        tension_gap,
        risk_indicator,
    );
    let risk_momentum = risk::risk_momentum(prior.risk_momentum, escalating_risk, factors.rho);
    let confidence_momentum =
        risk::confidence_momentum(prior.confidence_momentum, observation.confidence, factors.gamma);
    let regime = risk::classify(risk_momentum, z, risk_indicator, &params.thresholds);

    let last_ts = match prior.last_ts {
        Some(prev) if prev > now => prev,
        _ => now,
    };

    let state = TemporalState {
        short_term: smoothed.short_term,
        baseline: smoothed.baseline,
        sigma,
        z,
        risk_momentum,
        confidence_momentum,
        regime,
        last_ts: Some(last_ts),
        n: prior.n.saturating_add(1),
    };

    StepOutcome {
        state,
        factors,
        blend: smoothed.blend,
        tension_gap,
        risk_indicator,
        escalating_risk,
    }
}
