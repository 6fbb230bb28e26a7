//! Stable string codes for errors crossing the library boundary.

pub const INVALID_OBSERVATION: &str = "INVALID_OBSERVATION";
pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const SEASONALITY_WRITE_FAILED: &str = "SEASONALITY_WRITE_FAILED";
pub const KEYWORD_WRITE_FAILED: &str = "KEYWORD_WRITE_FAILED";
pub const SPIKE_LOG_FAILED: &str = "SPIKE_LOG_FAILED";
pub const CORRUPT_STATE: &str = "CORRUPT_STATE";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Maps an error to its stable code.
pub trait VigilErrorCode {
    fn error_code(&self) -> &'static str;
}
