//! The store document and the operations on it.
//!
//! `Database` knows nothing about locking or files; [`crate::Store`] wraps
//! it with both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use arena_battle::BattleResult;
use arena_core::{Character, CharacterId, Role, User, UserId};

use crate::error::{StoreError, StoreResult};
use crate::records::{BattleRecord, BattleSummary, Session, StoredUser};
use crate::roster;

const UNKNOWN_NAME: &str = "(unknown)";

/// Everything the store holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    users: Vec<StoredUser>,
    #[serde(default)]
    heroes: Vec<Character>,
    #[serde(default)]
    mercenaries: Vec<Character>,
    #[serde(default)]
    sessions: Vec<Session>,
    #[serde(default)]
    battles: Vec<BattleRecord>,
}

impl Database {
    /// An empty document with no rosters.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document with the given rosters.
    pub fn with_rosters(heroes: Vec<Character>, mercenaries: Vec<Character>) -> Self {
        Self {
            heroes,
            mercenaries,
            ..Self::default()
        }
    }

    /// Fill empty rosters with the default characters. Returns whether
    /// anything was added.
    pub fn seed_rosters(&mut self) -> bool {
        let mut seeded = false;
        if self.heroes.is_empty() {
            self.heroes = roster::default_heroes();
            seeded = true;
        }
        if self.mercenaries.is_empty() {
            self.mercenaries = roster::default_mercenaries();
            seeded = true;
        }
        seeded
    }

    fn roster(&self, role: Role) -> &[Character] {
        match role {
            Role::Hero => &self.heroes,
            Role::Mercenary => &self.mercenaries,
        }
    }

    /// All characters of a roster, ordered by name.
    pub fn list(&self, role: Role) -> Vec<Character> {
        let mut out = self.roster(role).to_vec();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// One character by id.
    pub fn find(&self, role: Role, id: CharacterId) -> StoreResult<Character> {
        self.roster(role)
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { role, id })
    }

    /// Whether the username or email is already registered.
    pub fn user_exists(&self, username: &str, email: &str) -> bool {
        self.users
            .iter()
            .any(|u| u.user.username == username || u.user.email == email)
    }

    /// Register a user.
    pub fn create_user(
        &mut self,
        username: &str,
        email: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> StoreResult<User> {
        if self.user_exists(username, email) {
            return Err(StoreError::DuplicateUser);
        }
        let id = self.users.iter().map(|u| u.user.id.0).max().unwrap_or(0) + 1;
        let user = User {
            id: UserId(id),
            username: username.to_string(),
            email: email.to_string(),
            created_at: now,
        };
        self.users.push(StoredUser {
            user: user.clone(),
            password_hash: password_hash.to_string(),
        });
        Ok(user)
    }

    /// A user and their password hash, by username.
    pub fn find_credentials(&self, username: &str) -> Option<(User, String)> {
        self.users
            .iter()
            .find(|u| u.user.username == username)
            .map(|u| (u.user.clone(), u.password_hash.clone()))
    }

    /// A user by id.
    pub fn find_user(&self, id: UserId) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.user.id == id)
            .map(|u| u.user.clone())
    }

    /// Remember a session, dropping any that have expired by its issue time.
    pub fn create_session(&mut self, session: Session) {
        let now = session.issued_at;
        self.sessions.retain(|s| !s.is_expired(now));
        self.sessions.push(session);
    }

    /// A session by token.
    pub fn find_session(&self, token: &str) -> Option<Session> {
        self.sessions.iter().find(|s| s.token == token).cloned()
    }

    /// Forget a session. Returns whether it existed.
    pub fn delete_session(&mut self, token: &str) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.token != token);
        self.sessions.len() != before
    }

    /// Append a battle.
    pub fn record_battle(
        &mut self,
        user_id: UserId,
        hero_id: CharacterId,
        mercenary_id: CharacterId,
        result: &BattleResult,
        now: DateTime<Utc>,
    ) -> BattleRecord {
        let id = self.battles.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let record = BattleRecord {
            id,
            user_id,
            hero_id,
            mercenary_id,
            result: result.clone(),
            created_at: now,
        };
        self.battles.push(record.clone());
        record
    }

    /// A user's battles, newest first, with fighter names filled in.
    pub fn history(&self, user_id: UserId) -> Vec<BattleSummary> {
        let mut rows: Vec<BattleSummary> = self
            .battles
            .iter()
            .filter(|b| b.user_id == user_id)
            .map(|b| BattleSummary {
                id: b.id,
                created_at: b.created_at,
                hero_name: self.name_of(Role::Hero, b.hero_id),
                mercenary_name: self.name_of(Role::Mercenary, b.mercenary_id),
                result: b.result.clone(),
            })
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows
    }

    fn name_of(&self, role: Role, id: CharacterId) -> String {
        self.roster(role)
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of recorded battles.
    pub fn battle_count(&self) -> usize {
        self.battles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_battle::{FixedRoll, simulate};
    use chrono::Duration;

    fn seeded() -> Database {
        let mut db = Database::new();
        assert!(db.seed_rosters());
        db
    }

    #[test]
    fn seeding_only_fills_empty_rosters() {
        let mut db = Database::with_rosters(vec![Character::new(9, "Solo", 50, 10, 10)], vec![]);
        assert!(db.seed_rosters());
        assert_eq!(db.list(Role::Hero).len(), 1);
        assert_eq!(db.list(Role::Mercenary).len(), 4);
        assert!(!db.seed_rosters());
    }

    #[test]
    fn list_is_ordered_by_name() {
        let db = seeded();
        let names: Vec<String> = db.list(Role::Hero).into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["Elven Archer", "Fire Mage", "Holy Paladin", "Sword Knight"]
        );
    }

    #[test]
    fn find_unknown_id_is_not_found() {
        let db = seeded();
        assert_eq!(db.find(Role::Mercenary, CharacterId(1)).unwrap().name, "Shadow Assassin");
        let err = db.find(Role::Hero, CharacterId(99)).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { role: Role::Hero, .. }));
        assert_eq!(err.to_string(), "hero 99 not found");
    }

    #[test]
    fn duplicate_username_or_email_rejected() {
        let mut db = Database::new();
        let now = Utc::now();
        let u = db.create_user("ayu", "ayu@example.com", "h", now).unwrap();
        assert_eq!(u.id, UserId(1));
        assert!(db.create_user("ayu", "other@example.com", "h", now).is_err());
        assert!(db.create_user("other", "ayu@example.com", "h", now).is_err());
        let v = db.create_user("budi", "budi@example.com", "h", now).unwrap();
        assert_eq!(v.id, UserId(2));
        assert_eq!(db.user_count(), 2);
    }

    #[test]
    fn credentials_carry_hash() {
        let mut db = Database::new();
        db.create_user("ayu", "ayu@example.com", "salt$hash", Utc::now())
            .unwrap();
        let (user, hash) = db.find_credentials("ayu").unwrap();
        assert_eq!(user.email, "ayu@example.com");
        assert_eq!(hash, "salt$hash");
        assert!(db.find_credentials("nobody").is_none());
        assert_eq!(db.find_user(user.id).unwrap().username, "ayu");
    }

    #[test]
    fn expired_sessions_pruned_on_create() {
        let mut db = Database::new();
        let t0 = Utc::now();
        let old = Session {
            token: "old".to_string(),
            user_id: UserId(1),
            username: "ayu".to_string(),
            issued_at: t0,
            expires_at: t0 + Duration::hours(1),
        };
        db.create_session(old);
        let fresh = Session {
            token: "fresh".to_string(),
            issued_at: t0 + Duration::hours(2),
            expires_at: t0 + Duration::hours(26),
            ..db.find_session("old").unwrap()
        };
        db.create_session(fresh);
        assert!(db.find_session("old").is_none());
        assert!(db.find_session("fresh").is_some());
        assert!(db.delete_session("fresh"));
        assert!(!db.delete_session("fresh"));
    }

    #[test]
    fn history_is_newest_first_and_per_user() {
        let mut db = seeded();
        let hero = db.find(Role::Hero, CharacterId(1)).unwrap();
        let merc = db.find(Role::Mercenary, CharacterId(1)).unwrap();
        let result = simulate(&hero, &merc, &mut FixedRoll(3)).unwrap();

        let t0 = Utc::now();
        db.record_battle(UserId(1), hero.id, merc.id, &result, t0);
        db.record_battle(UserId(2), hero.id, merc.id, &result, t0);
        let newest = db.record_battle(
            UserId(1),
            CharacterId(2),
            CharacterId(42),
            &result,
            t0 + Duration::seconds(5),
        );

        let rows = db.history(UserId(1));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, newest.id);
        assert_eq!(rows[0].hero_name, "Fire Mage");
        assert_eq!(rows[0].mercenary_name, "(unknown)");
        assert_eq!(rows[1].hero_name, "Sword Knight");
        assert_eq!(db.battle_count(), 3);
        assert!(db.history(UserId(3)).is_empty());
    }
}
