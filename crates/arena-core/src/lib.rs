//! Core types for Arena: characters, rosters, and user accounts.
//!
//! This crate defines the data model shared by the battle engine, the store,
//! and the game service. It performs no I/O.

/// User accounts and identifiers.
pub mod account;
/// Character records and the two rosters they belong to.
pub mod character;
/// Error types used throughout the crate.
pub mod error;

/// Re-export account types.
pub use account::{User, UserId};
/// Re-export character types.
pub use character::{Character, CharacterId, Role};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
