//! Rows kept by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use arena_battle::BattleResult;
use arena_core::{CharacterId, User, UserId};

/// A registered user together with their password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    /// Public account data.
    #[serde(flatten)]
    pub user: User,
    /// Encoded password hash; never leaves the account layer.
    pub password_hash: String,
}

/// An issued login token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token.
    pub token: String,
    /// Account the token was issued to.
    pub user_id: UserId,
    /// Login name at issue time.
    pub username: String,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the token is past its expiry at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// A persisted battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleRecord {
    /// Store-assigned identifier.
    pub id: u32,
    /// Who started the battle.
    pub user_id: UserId,
    /// Hero that fought.
    pub hero_id: CharacterId,
    /// Mercenary that fought.
    pub mercenary_id: CharacterId,
    /// The full outcome.
    pub result: BattleResult,
    /// When the battle was recorded.
    pub created_at: DateTime<Utc>,
}

/// A history row: a battle joined with the names of its fighters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSummary {
    /// Identifier of the battle record.
    pub id: u32,
    /// When the battle was recorded.
    pub created_at: DateTime<Utc>,
    /// Hero's name, or `"(unknown)"` if no longer on the roster.
    pub hero_name: String,
    /// Mercenary's name, or `"(unknown)"` if no longer on the roster.
    pub mercenary_name: String,
    /// The full outcome.
    pub result: BattleResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn session_expiry_is_inclusive() {
        let now = Utc::now();
        let session = Session {
            token: "t".to_string(),
            user_id: UserId(1),
            username: "ayu".to_string(),
            issued_at: now,
            expires_at: now + Duration::hours(24),
        };
        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + Duration::hours(24)));
    }
}
