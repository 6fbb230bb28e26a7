use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Discrete severity label derived from the smoothed signals.
///
/// Ordered by severity: `Normal < Elevated < Alert`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    #[default]
    Normal,
    Elevated,
    Alert,
}

impl Regime {
    pub const ALL: [Regime; 3] = [Regime::Normal, Regime::Elevated, Regime::Alert];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Elevated => "elevated",
            Self::Alert => "alert",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Regime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "elevated" => Ok(Self::Elevated),
            "alert" => Ok(Self::Alert),
            other => Err(format!("unknown regime '{other}'")),
        }
    }
}
