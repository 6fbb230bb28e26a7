//! # vigil-core
//!
//! Foundation crate for the Vigil behavioral-state engine.
//! Defines the per-user temporal state, observations, the state store
//! contract, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod state;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VigilConfig;
pub use errors::{VigilError, VigilResult};
pub use models::{AugmentedObservation, KeywordWeight, Observation, SeasonalityKind, SpikeRecord};
pub use state::{Axes, Regime, TemporalState};
pub use traits::IStateStore;
