//! Best-effort facilities that run after the state is committed.
//!
//! Each returns the failures it hit instead of stopping at the first one.
//! The engine logs and counts them; none reach the caller.

pub mod keywords;
pub mod seasonality;
pub mod spikes;
