use std::collections::HashSet;

use vigil_core::config::EngineConfig;
use vigil_core::constants::{ERI_AROUSAL_WEIGHT, ERI_RISK_FLAG_WEIGHT, ERI_TENSION_WEIGHT};
use vigil_core::{Axes, Regime};

/// Cut-offs for the three-level regime classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeThresholds {
    pub alert_risk: f64,
    pub alert_z: f64,
    pub elevated_risk: f64,
    pub elevated_z: f64,
}

impl From<&EngineConfig> for RegimeThresholds {
    fn from(config: &EngineConfig) -> Self {
        Self {
            alert_risk: config.alert_risk_threshold,
            alert_z: config.alert_z_threshold,
            elevated_risk: config.elevated_risk_threshold,
            elevated_z: config.elevated_z_threshold,
        }
    }
}

/// Normalize a risk flag for comparison against the critical set.
pub fn normalize_flag(flag: &str) -> String {
    flag.trim().to_lowercase()
}

/// L1 distance between the raw observation and the caller's composite hint.
///
/// Zero when the hint is absent or not finite.
pub fn tension_gap(observed: Axes, hint: Option<Axes>) -> f64 {
    match hint {
        Some(composite) if composite.is_finite() => observed.l1_distance(&composite),
        _ => 0.0,
    }
}

/// 1.0 when any observed flag is in the critical set, else 0.0.
///
/// `critical` must hold normalized flags.
pub fn risk_indicator<'a, I>(flags: I, critical: &HashSet<String>) -> f64
where
    I: IntoIterator<Item = &'a String>,
{
    let hit = flags
        .into_iter()
        .any(|flag| critical.contains(&normalize_flag(flag)));
    if hit {
        1.0
    } else {
        0.0
    }
}

/// Instantaneous escalating-risk driver, clamped to [0, 1].
///
/// Combines arousal above the prior baseline, the tension gap (capped at 1)
/// and the explicit risk indicator.
pub fn escalating_risk(
    arousal: f64,
    prior_baseline_arousal: f64,
    gap: f64,
    indicator: f64,
) -> f64 {
    let excess = (arousal - prior_baseline_arousal).max(0.0);
    let eri = ERI_AROUSAL_WEIGHT * excess
        + ERI_TENSION_WEIGHT * gap.min(1.0)
        + ERI_RISK_FLAG_WEIGHT * indicator;
    eri.clamp(0.0, 1.0)
}

/// Decay risk momentum toward the new driver.
pub fn risk_momentum(prior: f64, eri: f64, rho: f64) -> f64 {
    ((1.0 - rho) * prior + rho * eri).clamp(0.0, 1.0)
}

/// Decay confidence momentum toward the observation's confidence.
pub fn confidence_momentum(prior: f64, confidence: f64, gamma: f64) -> f64 {
    ((1.0 - gamma) * prior + gamma * confidence).clamp(0.0, 1.0)
}

/// Classify the regime. Alert conditions are checked first.
pub fn classify(
    risk_momentum: f64,
    z: Axes,
    indicator: f64,
    thresholds: &RegimeThresholds,
) -> Regime {
    if indicator > 0.0
        || risk_momentum >= thresholds.alert_risk
        || z.max_abs() >= thresholds.alert_z
    {
        Regime::Alert
    } else if risk_momentum >= thresholds.elevated_risk || z.max_abs() >= thresholds.elevated_z {
        Regime::Elevated
    } else {
        Regime::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> RegimeThresholds {
        RegimeThresholds::from(&EngineConfig::default())
    }

    #[test]
    fn eri_is_clamped() {
        assert_eq!(escalating_risk(5.0, 0.0, 5.0, 1.0), 1.0);
        assert_eq!(escalating_risk(0.0, 0.9, 0.0, 0.0), 0.0);
    }

    #[test]
    fn classify_boundaries() {
        let t = thresholds();
        assert_eq!(classify(0.7, Axes::default(), 0.0, &t), Regime::Alert);
        assert_eq!(classify(0.69, Axes::default(), 0.0, &t), Regime::Elevated);
        assert_eq!(classify(0.35, Axes::default(), 0.0, &t), Regime::Elevated);
        assert_eq!(classify(0.34, Axes::default(), 0.0, &t), Regime::Normal);
        assert_eq!(classify(0.0, Axes::new(0.0, -2.0), 0.0, &t), Regime::Alert);
        assert_eq!(classify(0.0, Axes::new(2.5, 0.0), 0.0, &t), Regime::Alert);
        assert_eq!(classify(0.0, Axes::new(1.5, 0.0), 0.0, &t), Regime::Elevated);
        assert_eq!(classify(0.0, Axes::new(0.0, 0.99), 0.0, &t), Regime::Normal);
        assert_eq!(classify(0.0, Axes::default(), 1.0, &t), Regime::Alert);
    }

    #[test]
    fn flags_match_case_insensitively() {
        let critical: HashSet<String> = ["self_harm".to_string()].into_iter().collect();
        let flags = vec!["  Self_Harm ".to_string()];
        assert_eq!(risk_indicator(&flags, &critical), 1.0);
        assert_eq!(risk_indicator(&Vec::<String>::new(), &critical), 0.0);
    }
}
