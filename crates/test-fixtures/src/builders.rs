use chrono::{DateTime, Duration, TimeZone, Utc};
use vigil_core::{Axes, Observation, Regime, TemporalState};

/// Fixed reference instant: Monday 2024-01-01 12:00 UTC.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

pub fn hours_after(base: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
    base + Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}

/// Observation sitting exactly on the default center with full confidence.
pub fn calm() -> Observation {
    Observation::new(0.0, 0.3, 1.0)
}

/// Mildly positive, low-arousal observation.
pub fn mild() -> Observation {
    Observation::new(0.1, 0.35, 0.8)
}

/// High-arousal negative observation.
pub fn agitated() -> Observation {
    Observation::new(-0.8, 0.95, 0.9)
}

/// A warm state centered on `center` with the given sigma and risk momentum.
pub fn warm_state(
    center: Axes,
    sigma: Axes,
    risk_momentum: f64,
    last_ts: DateTime<Utc>,
    n: u64,
) -> TemporalState {
    TemporalState {
        short_term: center,
        baseline: center,
        sigma,
        z: Axes::default(),
        risk_momentum,
        confidence_momentum: 0.5,
        regime: Regime::Normal,
        last_ts: Some(last_ts),
        n,
    }
}
