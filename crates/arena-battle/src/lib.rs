//! Turn-based battle simulation engine for Arena.
//!
//! Pits one hero against one mercenary in a bounded damage-exchange loop.
//! The random bonus on each strike comes from an injected [`RandomSource`],
//! so a fixed source reproduces a battle exactly.

pub mod damage;
pub mod engine;
pub mod error;
pub mod log;
pub mod random;
pub mod result;

pub use damage::{BONUS_MAX, BONUS_MIN, damage_for, roll_damage};
pub use engine::{MAX_ROUNDS, simulate, simulate_or_fallback};
pub use error::{BattleError, EngineResult};
pub use log::{BattleLogEntry, EntryKind};
pub use random::{FixedRoll, RandomSource, ScriptedRolls};
pub use result::{BattleResult, Winner};
