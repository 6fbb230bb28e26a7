//! SQL operations, one module per table family.

pub mod keyword_ops;
pub mod seasonality_ops;
pub mod spike_ops;
pub mod state_ops;
