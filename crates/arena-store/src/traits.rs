//! Repository contracts the game service is written against.

use arena_battle::BattleResult;
use arena_core::{Character, CharacterId, Role, User, UserId};

use crate::error::StoreResult;
use crate::records::{BattleRecord, BattleSummary, Session};

/// Read access to the hero and mercenary rosters.
pub trait CharacterRepository: Send + Sync {
    /// All characters of a roster, ordered by name.
    fn list(&self, role: Role) -> StoreResult<Vec<Character>>;

    /// One character by id.
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound) if
    /// the roster has no such id.
    fn find(&self, role: Role, id: CharacterId) -> StoreResult<Character>;
}

/// Append-only battle history.
pub trait BattleStore: Send + Sync {
    /// Persist one battle outcome.
    fn record(
        &self,
        user_id: UserId,
        hero_id: CharacterId,
        mercenary_id: CharacterId,
        result: &BattleResult,
    ) -> StoreResult<BattleRecord>;

    /// A user's battles, newest first.
    fn history(&self, user_id: UserId) -> StoreResult<Vec<BattleSummary>>;
}

/// Registered users and their login sessions.
pub trait AccountStore: Send + Sync {
    /// Register a user. Fails with
    /// [`StoreError::DuplicateUser`](crate::StoreError::DuplicateUser) if the
    /// username or email is taken.
    fn create_user(&self, username: &str, email: &str, password_hash: &str) -> StoreResult<User>;

    /// Whether the username or email is already registered.
    fn user_exists(&self, username: &str, email: &str) -> StoreResult<bool>;

    /// A user and their password hash, looked up by username.
    fn find_credentials(&self, username: &str) -> StoreResult<Option<(User, String)>>;

    /// A user by id.
    fn find_user(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Remember an issued session.
    fn create_session(&self, session: Session) -> StoreResult<()>;

    /// Look up a session by token.
    fn find_session(&self, token: &str) -> StoreResult<Option<Session>>;

    /// Forget a session. Returns whether it existed.
    fn delete_session(&self, token: &str) -> StoreResult<bool>;
}
