//! Error types for the game service.

use arena_core::CharacterId;
use thiserror::Error;

/// Result type for game service operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors returned by the game service.
#[derive(Debug, Error)]
pub enum GameError {
    /// A registration field failed validation.
    #[error("{0}")]
    Validation(String),

    /// The username or email is already registered.
    #[error("username or email already registered")]
    AlreadyRegistered,

    /// Unknown username or wrong password. The two are not told apart.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The token was never issued or has been revoked.
    #[error("invalid token")]
    InvalidToken,

    /// The token is past its expiry.
    #[error("token expired; log in again")]
    TokenExpired,

    /// A battle was requested without both a hero and a mercenary.
    #[error("a hero and a mercenary must both be selected")]
    MissingSelection,

    /// The requested hero is not on the roster.
    #[error("hero {0} not found")]
    HeroNotFound(CharacterId),

    /// The requested mercenary is not on the roster.
    #[error("mercenary {0} not found")]
    MercenaryNotFound(CharacterId),

    /// A password could not be hashed.
    #[error("password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// The configuration file or environment is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] arena_store::StoreError),

    /// The battle engine rejected the combatants or faulted.
    #[error(transparent)]
    Battle(#[from] arena_battle::BattleError),
}
