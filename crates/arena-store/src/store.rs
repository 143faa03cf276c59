//! Thread-safe store over a [`Database`], optionally backed by a JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard};

use chrono::Utc;

use arena_battle::BattleResult;
use arena_core::{Character, CharacterId, Role, User, UserId};

use crate::database::Database;
use crate::error::{StoreError, StoreResult};
use crate::records::{BattleRecord, BattleSummary, Session};
use crate::traits::{AccountStore, BattleStore, CharacterRepository};

/// The store handle. Open it once at startup and share it by reference.
///
/// File-backed stores rewrite the whole document after every mutation,
/// writing to a sibling temp file first and renaming it into place.
#[derive(Debug)]
pub struct Store {
    db: RwLock<Database>,
    path: Option<PathBuf>,
}

impl Store {
    /// An in-memory store with the default rosters.
    pub fn in_memory() -> Self {
        let mut db = Database::new();
        db.seed_rosters();
        Self::from_database(db)
    }

    /// An in-memory store over an existing document.
    pub fn from_database(db: Database) -> Self {
        Self {
            db: RwLock::new(db),
            path: None,
        }
    }

    /// Open (or create) a file-backed store.
    ///
    /// Empty rosters are seeded with the default characters and the result
    /// is written back immediately.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut db = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
            serde_json::from_str(&text).map_err(|source| StoreError::Json {
                path: path.display().to_string(),
                source,
            })?
        } else {
            tracing::info!(path = %path.display(), "creating new store");
            Database::new()
        };

        let seeded = db.seed_rosters();
        let store = Self {
            db: RwLock::new(db),
            path: Some(path),
        };
        if seeded || !store.is_persisted() {
            let db = store.read()?;
            store.persist(&db)?;
        }
        Ok(store)
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn is_persisted(&self) -> bool {
        self.path.as_ref().is_none_or(|p| p.exists())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Database>> {
        self.db.read().map_err(|_| StoreError::LockPoisoned)
    }

    /// Apply a mutation to a copy of the document, persist it, then swap it
    /// in. Nothing changes in memory unless both steps succeed.
    fn write<T>(&self, f: impl FnOnce(&mut Database) -> StoreResult<T>) -> StoreResult<T> {
        let mut db = self.db.write().map_err(|_| StoreError::LockPoisoned)?;
        let mut next = db.clone();
        let out = f(&mut next)?;
        self.persist(&next)?;
        *db = next;
        Ok(out)
    }

    fn persist(&self, db: &Database) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let io_err = |source: std::io::Error| StoreError::Io {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(db).map_err(|source| StoreError::Json {
            path: path.display().to_string(),
            source,
        })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }

    /// A copy of the whole document.
    pub fn snapshot(&self) -> StoreResult<Database> {
        Ok(self.read()?.clone())
    }
}

impl CharacterRepository for Store {
    fn list(&self, role: Role) -> StoreResult<Vec<Character>> {
        Ok(self.read()?.list(role))
    }

    fn find(&self, role: Role, id: CharacterId) -> StoreResult<Character> {
        self.read()?.find(role, id)
    }
}

impl BattleStore for Store {
    fn record(
        &self,
        user_id: UserId,
        hero_id: CharacterId,
        mercenary_id: CharacterId,
        result: &BattleResult,
    ) -> StoreResult<BattleRecord> {
        let record = self.write(|db| {
            Ok(db.record_battle(user_id, hero_id, mercenary_id, result, Utc::now()))
        })?;
        tracing::debug!(battle = record.id, user = %user_id, "battle recorded");
        Ok(record)
    }

    fn history(&self, user_id: UserId) -> StoreResult<Vec<BattleSummary>> {
        Ok(self.read()?.history(user_id))
    }
}

impl AccountStore for Store {
    fn create_user(&self, username: &str, email: &str, password_hash: &str) -> StoreResult<User> {
        self.write(|db| db.create_user(username, email, password_hash, Utc::now()))
    }

    fn user_exists(&self, username: &str, email: &str) -> StoreResult<bool> {
        Ok(self.read()?.user_exists(username, email))
    }

    fn find_credentials(&self, username: &str) -> StoreResult<Option<(User, String)>> {
        Ok(self.read()?.find_credentials(username))
    }

    fn find_user(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(self.read()?.find_user(id))
    }

    fn create_session(&self, session: Session) -> StoreResult<()> {
        self.write(|db| {
            db.create_session(session);
            Ok(())
        })
    }

    fn find_session(&self, token: &str) -> StoreResult<Option<Session>> {
        Ok(self.read()?.find_session(token))
    }

    fn delete_session(&self, token: &str) -> StoreResult<bool> {
        self.write(|db| Ok(db.delete_session(token)))
    }
}
