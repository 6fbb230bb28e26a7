use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::state::{Axes, TemporalState};

/// One emotional observation produced upstream for a user.
///
/// Read-only to the engine. Validation happens at the engine boundary, so a
/// value of this type may still hold non-finite numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub valence: f64,
    pub arousal: f64,
    /// Upstream confidence in [0, 1].
    pub confidence: f64,
    #[serde(default)]
    pub risk_flags: BTreeSet<String>,
    #[serde(default)]
    pub event_keywords: Vec<String>,
    /// Short-term composite the caller already tracks. Untrusted hint used
    /// only for the tension signal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_composite_state: Option<Axes>,
    /// Offset of the user's local calendar from UTC, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
}

impl Observation {
    pub fn new(valence: f64, arousal: f64, confidence: f64) -> Self {
        Self {
            valence,
            arousal,
            confidence,
            risk_flags: BTreeSet::new(),
            event_keywords: Vec::new(),
            prior_composite_state: None,
            utc_offset_minutes: None,
        }
    }

    pub fn with_risk_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.risk_flags = flags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_prior_composite(mut self, composite: Axes) -> Self {
        self.prior_composite_state = Some(composite);
        self
    }

    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = Some(minutes);
        self
    }

    /// Raw valence/arousal as a point.
    pub fn point(&self) -> Axes {
        Axes::new(self.valence, self.arousal)
    }
}

/// The caller's observation returned with the state it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentedObservation {
    #[serde(flatten)]
    pub observation: Observation,
    pub temporal_after: TemporalState,
}
