//! # vigil-store
//!
//! Backends implementing [`vigil_core::IStateStore`].
//!
//! - `memory_store`: `DashMap`-backed store for single-instance hosts and tests
//! - `sqlite_store`: durable store on a single serialized SQLite connection
//! - `connection`, `pragmas`, `migrations`, `queries`: SQLite plumbing

pub mod connection;
pub mod memory_store;
pub mod migrations;
pub mod pragmas;
pub mod queries;
pub mod sqlite_store;

pub use connection::SqliteConnection;
pub use memory_store::InMemoryStateStore;
pub use sqlite_store::SqliteStateStore;

use vigil_core::errors::{StorageError, VigilError};

/// Wrap a backend failure message as a Vigil storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> VigilError {
    VigilError::StorageError(StorageError::SqliteError {
        message: message.into(),
    })
}
