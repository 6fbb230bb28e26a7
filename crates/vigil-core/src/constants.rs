/// Lower bound for every per-axis standard deviation.
pub const SIGMA_FLOOR: f64 = 1e-3;

/// Minimum elapsed time fed into the decay factors, in hours.
pub const MIN_ELAPSED_HOURS: f64 = 1.0;

/// Largest accepted UTC offset for a user's local calendar, in minutes.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Weights of the escalating-risk driver.
pub const ERI_AROUSAL_WEIGHT: f64 = 0.45;
pub const ERI_TENSION_WEIGHT: f64 = 0.25;
pub const ERI_RISK_FLAG_WEIGHT: f64 = 0.30;
