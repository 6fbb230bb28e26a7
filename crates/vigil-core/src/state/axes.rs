use serde::{Deserialize, Serialize};

/// A valence/arousal pair.
///
/// Valence is roughly in [-1, 1], arousal roughly in [0, 1]. Neither is
/// clamped: the engine only relies on the values being finite.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Axes {
    pub v: f64,
    pub a: f64,
}

impl Axes {
    pub const fn new(v: f64, a: f64) -> Self {
        Self { v, a }
    }

    /// Both components are finite (not NaN, not infinite).
    pub fn is_finite(&self) -> bool {
        self.v.is_finite() && self.a.is_finite()
    }

    /// Largest absolute component.
    pub fn max_abs(&self) -> f64 {
        self.v.abs().max(self.a.abs())
    }

    /// L1 distance between two points.
    pub fn l1_distance(&self, other: &Axes) -> f64 {
        (self.v - other.v).abs() + (self.a - other.a).abs()
    }
}
