//! The three numeric stages of one update, applied in order:
//! decay & smoothing, volatility & z-scores, risk momentum & regime.

pub mod decay;
pub mod risk;
pub mod volatility;

pub use decay::{DecayFactors, Smoothed, TimeConstants};
pub use risk::RegimeThresholds;
