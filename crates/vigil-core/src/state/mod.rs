//! Per-user temporal state: the only stateful value the engine owns.

pub mod axes;
pub mod regime;
pub mod temporal_state;

pub use axes::Axes;
pub use regime::Regime;
pub use temporal_state::TemporalState;
