use super::error_code::{self, VigilErrorCode};
use super::{ConfigError, StorageError};

/// Top-level error for every Vigil operation.
///
/// Only `InvalidObservation` and `StoreUnavailable` ever escape
/// `process_observation`. The side-channel variants exist so failures can be
/// logged with a uniform shape before being swallowed.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error("invalid observation: {reason}")]
    InvalidObservation { reason: String },

    #[error("state store unavailable during {operation}: {reason}")]
    StoreUnavailable { operation: String, reason: String },

    #[error("seasonality write failed for {kind} period {period}: {reason}")]
    SeasonalityWriteFailed {
        kind: String,
        period: u32,
        reason: String,
    },

    #[error("keyword write failed for '{keyword}': {reason}")]
    KeywordWriteFailed { keyword: String, reason: String },

    #[error("spike log failed: {reason}")]
    SpikeLogFailed { reason: String },

    #[error("corrupt state for user {user_id}: {details}")]
    CorruptState { user_id: String, details: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl VigilError {
    /// Wrap any store failure as `StoreUnavailable` for the given operation.
    pub fn store_unavailable(operation: &str, source: impl std::fmt::Display) -> Self {
        Self::StoreUnavailable {
            operation: operation.to_string(),
            reason: source.to_string(),
        }
    }

    /// Whether this error may be returned from `process_observation`.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::InvalidObservation { .. } | Self::StoreUnavailable { .. }
        )
    }
}

impl VigilErrorCode for VigilError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidObservation { .. } => error_code::INVALID_OBSERVATION,
            Self::StoreUnavailable { .. } => error_code::STORE_UNAVAILABLE,
            Self::SeasonalityWriteFailed { .. } => error_code::SEASONALITY_WRITE_FAILED,
            Self::KeywordWriteFailed { .. } => error_code::KEYWORD_WRITE_FAILED,
            Self::SpikeLogFailed { .. } => error_code::SPIKE_LOG_FAILED,
            Self::CorruptState { .. } => error_code::CORRUPT_STATE,
            Self::StorageError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
