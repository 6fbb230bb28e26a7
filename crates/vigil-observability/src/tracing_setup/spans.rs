//! Span definitions for engine and store operations.

/// Create a span covering one `process_observation` call.
#[macro_export]
macro_rules! observation_span {
    ($user_id:expr) => {
        tracing::info_span!("vigil.observation", user_id = %$user_id)
    };
}

/// Create a span covering one store call.
#[macro_export]
macro_rules! store_span {
    ($operation:expr, $user_id:expr) => {
        tracing::debug_span!("vigil.store", operation = $operation, user_id = %$user_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const OBSERVATION: &str = "vigil.observation";
    pub const STORE: &str = "vigil.store";
}
