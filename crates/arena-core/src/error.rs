use crate::character::CharacterId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when a record violates the data model.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A character has stats that cannot take part in a battle.
    #[error("character {id} (\"{name}\") has invalid stats: {reason}")]
    InvalidStats {
        /// Identifier of the offending character.
        id: CharacterId,
        /// Display name of the offending character.
        name: String,
        /// Which constraint was violated.
        reason: String,
    },

    /// A role name could not be parsed.
    #[error("unknown role: \"{0}\" (expected hero or mercenary)")]
    UnknownRole(String),
}
