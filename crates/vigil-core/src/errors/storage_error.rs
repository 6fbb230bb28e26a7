use super::error_code::{self, VigilErrorCode};

/// Backend-level errors raised by state store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("lock poisoned on {resource}")]
    LockPoisoned { resource: String },

    #[error("stored blob for {key} could not be decoded: {reason}")]
    DecodeFailed { key: String, reason: String },
}

impl VigilErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
