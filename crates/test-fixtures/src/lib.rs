//! Shared helpers for Vigil tests: scenario fixtures, observation builders,
//! and a store wrapper that fails on demand.

pub mod builders;
pub mod faulty_store;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use vigil_core::{Observation, Regime, TemporalState};

pub use builders::*;
pub use faulty_store::{Fault, FaultyStore};

/// Root directory of the scenario JSON files.
pub fn scenarios_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

/// Load and deserialize a JSON fixture relative to [`scenarios_root`].
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = scenarios_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all scenario files, sorted by name.
pub fn list_scenarios() -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(scenarios_root()) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// A prior state, one observation some hours later, and what must hold
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub prior: TemporalState,
    pub observation: Observation,
    /// Hours between `prior.last_ts` and the observation.
    pub elapsed_hours: f64,
    pub expect: Expectation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Expectation {
    pub regime: Option<Regime>,
    pub regime_not: Option<Regime>,
    pub short_term_v: Option<f64>,
    pub short_term_a: Option<f64>,
    pub min_abs_za: Option<f64>,
    pub max_risk_momentum: Option<f64>,
    pub tolerance: Option<f64>,
}

impl Expectation {
    pub fn tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(1e-3)
    }
}
