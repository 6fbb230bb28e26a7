use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable record of a statistically significant excursion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpikeRecord {
    pub timestamp: DateTime<Utc>,
    pub zv: f64,
    pub za: f64,
    #[serde(rename = "R")]
    pub risk_momentum: f64,
}

impl SpikeRecord {
    /// Largest absolute z-score carried by the record.
    pub fn peak_z(&self) -> f64 {
        self.zv.abs().max(self.za.abs())
    }
}
