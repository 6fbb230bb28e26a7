//! # vigil-engine
//!
//! Per-user temporal behavioral state: exponential smoothing of
//! valence/arousal, volatility and z-scores, risk momentum, and a three-level
//! regime classifier, plus best-effort seasonality, keyword, and spike
//! side channels.

pub mod auxiliary;
pub mod engine;
pub mod factors;
pub mod locks;
pub mod update;
pub mod validation;

pub use engine::BehaviorEngine;
pub use update::{step, StepOutcome, UpdateParams};
