//! Rosters, accounts, and battle history storage for Arena.
//!
//! The repository traits in [`traits`] are what the game service depends on.
//! [`Store`] implements all of them over a single JSON document, kept in
//! memory and optionally mirrored to disk after every write.

pub mod database;
pub mod error;
pub mod records;
pub mod roster;
pub mod store;
pub mod traits;

pub use database::Database;
pub use error::{StoreError, StoreResult};
pub use records::{BattleRecord, BattleSummary, Session, StoredUser};
pub use store::Store;
pub use traits::{AccountStore, BattleStore, CharacterRepository};
