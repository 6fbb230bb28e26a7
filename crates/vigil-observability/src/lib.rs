//! # vigil-observability
//!
//! Structured logging and counters for the behavioral-state engine.
//!
//! - `tracing_setup`: subscriber initialization and span macros
//! - `metrics`: lock-free counters updated by the engine on every call

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{EngineMetrics, MetricsSnapshot, SideChannel};
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
