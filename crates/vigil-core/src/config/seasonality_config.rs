use serde::{Deserialize, Serialize};

use super::defaults;

/// Seasonality tracker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalityConfig {
    pub enabled: bool,
    /// Decay horizon of the bucket averages (hours).
    pub horizon_hours: f64,
    /// Local calendar offset used when an observation carries none.
    pub default_utc_offset_minutes: i32,
}

impl Default for SeasonalityConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_SEASONALITY_ENABLED,
            horizon_hours: defaults::DEFAULT_SEASONALITY_HORIZON_HOURS,
            default_utc_offset_minutes: defaults::DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}
