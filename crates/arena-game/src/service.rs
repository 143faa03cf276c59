//! The game service: accounts, sessions, rosters, and battles.

use chrono::{Duration, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use uuid::Uuid;

use arena_battle::{BattleResult, RandomSource, simulate};
use arena_core::{Character, CharacterId, Role, User};
use arena_store::{
    AccountStore, BattleStore, BattleSummary, CharacterRepository, Session, StoreError,
};

use crate::config::ArenaConfig;
use crate::error::{GameError, GameResult};
use crate::password;
use crate::validate::Registration;

/// A battle request. An id of `0` means "not selected".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleRequest {
    /// Chosen hero.
    pub hero_id: u32,
    /// Chosen mercenary.
    pub mercenary_id: u32,
}

impl BattleRequest {
    /// A request for the given pair.
    pub fn new(hero_id: u32, mercenary_id: u32) -> Self {
        Self {
            hero_id,
            mercenary_id,
        }
    }
}

/// What a battle request hands back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleReport {
    /// The hero that fought.
    pub hero: Character,
    /// The mercenary that fought.
    pub mercenary: Character,
    /// The outcome.
    pub result: BattleResult,
    /// Whether the outcome made it into the history.
    pub saved: bool,
    /// Id of the history record, when saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<u32>,
}

/// A successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// The account that logged in.
    pub user: User,
    /// The issued session; hand `session.token` back on later calls.
    pub session: Session,
}

/// The game service over a store.
#[derive(Debug)]
pub struct Arena<S> {
    store: S,
    config: ArenaConfig,
}

impl<S> Arena<S>
where
    S: CharacterRepository + BattleStore + AccountStore,
{
    /// Wrap a store.
    pub fn new(store: S, config: ArenaConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// A battle RNG: seeded from the config when a seed is set, otherwise
    /// from the OS.
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Create an account.
    pub fn register(&self, registration: &Registration) -> GameResult<User> {
        registration.validate()?;
        if self
            .store
            .user_exists(&registration.username, &registration.email)?
        {
            return Err(GameError::AlreadyRegistered);
        }
        let hash = password::hash_password(&registration.password, self.config.password_cost)?;
        let user = self
            .store
            .create_user(&registration.username, &registration.email, &hash)
            .map_err(|e| match e {
                StoreError::DuplicateUser => GameError::AlreadyRegistered,
                other => other.into(),
            })?;
        tracing::info!(user = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    /// Check credentials and issue a token valid for `session_hours`.
    pub fn login(&self, username: &str, password: &str) -> GameResult<LoginOutcome> {
        let Some((user, hash)) = self.store.find_credentials(username.trim())? else {
            tracing::debug!(username, "login for unknown user");
            return Err(GameError::InvalidCredentials);
        };
        if !password::verify_password(password, &hash) {
            tracing::debug!(username, "login with wrong password");
            return Err(GameError::InvalidCredentials);
        }

        let now = Utc::now();
        let session = Session {
            token: Uuid::new_v4().to_string(),
            user_id: user.id,
            username: user.username.clone(),
            issued_at: now,
            expires_at: now + Duration::hours(i64::from(self.config.session_hours)),
        };
        self.store.create_session(session.clone())?;
        tracing::info!(user = %user.id, expires_at = %session.expires_at, "user logged in");
        Ok(LoginOutcome { user, session })
    }

    /// Revoke a token. Unknown tokens are an error.
    pub fn logout(&self, token: &str) -> GameResult<()> {
        if self.store.delete_session(token.trim())? {
            Ok(())
        } else {
            Err(GameError::InvalidToken)
        }
    }

    /// Resolve a token to its account.
    pub fn authenticate(&self, token: &str) -> GameResult<User> {
        let session = self
            .store
            .find_session(token.trim())?
            .ok_or(GameError::InvalidToken)?;
        if session.is_expired(Utc::now()) {
            return Err(GameError::TokenExpired);
        }
        self.store
            .find_user(session.user_id)?
            .ok_or(GameError::InvalidToken)
    }

    /// A roster, ordered by name.
    pub fn roster(&self, token: &str, role: Role) -> GameResult<Vec<Character>> {
        self.authenticate(token)?;
        Ok(self.store.list(role)?)
    }

    /// Fight a battle and record it in the caller's history.
    ///
    /// A failed save does not lose the result: the report comes back with
    /// `saved = false`.
    pub fn battle(
        &self,
        token: &str,
        request: BattleRequest,
        rng: &mut impl RandomSource,
    ) -> GameResult<BattleReport> {
        let user = self.authenticate(token)?;
        if request.hero_id == 0 || request.mercenary_id == 0 {
            return Err(GameError::MissingSelection);
        }

        let hero = self.resolve(Role::Hero, CharacterId(request.hero_id))?;
        let mercenary = self.resolve(Role::Mercenary, CharacterId(request.mercenary_id))?;
        let result = simulate(&hero, &mercenary, rng)?;

        let record_id = match self.store.record(user.id, hero.id, mercenary.id, &result) {
            Ok(record) => {
                tracing::info!(
                    battle = record.id,
                    user = %user.id,
                    winner = %result.winner,
                    "battle saved"
                );
                Some(record.id)
            }
            Err(err) => {
                tracing::warn!(error = %err, user = %user.id, "failed to save battle");
                None
            }
        };

        Ok(BattleReport {
            hero,
            mercenary,
            result,
            saved: record_id.is_some(),
            record_id,
        })
    }

    /// The caller's battles, newest first.
    pub fn history(&self, token: &str) -> GameResult<Vec<BattleSummary>> {
        let user = self.authenticate(token)?;
        Ok(self.store.history(user.id)?)
    }

    fn resolve(&self, role: Role, id: CharacterId) -> GameResult<Character> {
        self.store.find(role, id).map_err(|e| match e {
            StoreError::NotFound {
                role: Role::Hero,
                id,
            } => GameError::HeroNotFound(id),
            StoreError::NotFound {
                role: Role::Mercenary,
                id,
            } => GameError::MercenaryNotFound(id),
            other => other.into(),
        })
    }
}
