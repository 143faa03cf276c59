//! Error types for the battle engine.

/// Errors that can occur while simulating a battle.
#[derive(Debug, thiserror::Error)]
pub enum BattleError {
    /// A combatant is missing or cannot fight (zero HP).
    #[error("invalid combatants: {0}")]
    InvalidCombatants(String),

    /// Something unexpected went wrong mid-simulation.
    #[error("internal fault during battle: {0}")]
    InternalFault(String),
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, BattleError>;
