//! Error handling for Vigil.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod storage_error;
pub mod vigil_error;

pub use config_error::ConfigError;
pub use error_code::VigilErrorCode;
pub use storage_error::StorageError;
pub use vigil_error::VigilError;

/// Convenience alias used across the workspace.
pub type VigilResult<T> = Result<T, VigilError>;
