//! Error types raised by store implementations.

use arena_core::{CharacterId, Role};
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No character with this id exists in the roster.
    #[error("{role} {id} not found")]
    NotFound {
        /// Roster that was searched.
        role: Role,
        /// Identifier that was requested.
        id: CharacterId,
    },

    /// The username or email is already registered.
    #[error("username or email already registered")]
    DuplicateUser,

    /// The store lock was poisoned by a panicking writer.
    #[error("store lock was poisoned")]
    LockPoisoned,

    /// The backing file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The backing file is not a valid store document.
    #[error("corrupted store {path}: {source}")]
    Json {
        /// File being decoded.
        path: String,
        /// Underlying error.
        source: serde_json::Error,
    },
}
