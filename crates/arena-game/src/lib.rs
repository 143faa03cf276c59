//! Accounts, configuration, and battle orchestration for Arena.
//!
//! [`Arena`] is the request/response layer: it checks login tokens, resolves
//! roster ids, runs the battle engine, and records the outcome. It holds the
//! store it was given and never reaches for global state.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod validate;

pub use config::ArenaConfig;
pub use error::{GameError, GameResult};
pub use service::{Arena, BattleReport, BattleRequest, LoginOutcome};
pub use validate::Registration;
