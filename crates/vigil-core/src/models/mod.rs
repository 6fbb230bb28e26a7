//! Values exchanged between the engine, its caller, and the state store.

pub mod keyword;
pub mod observation;
pub mod seasonality;
pub mod spike;

pub use keyword::KeywordWeight;
pub use observation::{AugmentedObservation, Observation};
pub use seasonality::SeasonalityKind;
pub use spike::SpikeRecord;
