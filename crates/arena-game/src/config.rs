//! Configuration for an Arena process.
//!
//! Layers, lowest precedence first: built-in defaults, an optional TOML file,
//! `ARENA_*` environment variables, then whatever the caller sets with the
//! builder methods (the CLI applies its flags last).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GameError, GameResult};
use crate::password;

/// Name of the config file looked for next to the data file.
pub const CONFIG_FILE_NAME: &str = "arena.toml";

/// Default lifetime of a login token, in hours.
pub const DEFAULT_SESSION_HOURS: u32 = 24;

/// Longest accepted login token lifetime, in hours.
pub const MAX_SESSION_HOURS: u32 = 720;

/// Configuration for the game service and its store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaConfig {
    /// JSON file holding rosters, accounts, and battle history.
    pub data_file: PathBuf,
    /// RNG seed for reproducible battles. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Login token lifetime in hours (1-720).
    pub session_hours: u32,
    /// bcrypt cost for new password hashes (4-31).
    pub password_cost: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_dir().join("arena.json"),
            seed: None,
            session_hours: DEFAULT_SESSION_HOURS,
            password_cost: password::DEFAULT_COST,
        }
    }
}

/// The shape of `arena.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_file: Option<PathBuf>,
    seed: Option<u64>,
    session_hours: Option<u32>,
    password_cost: Option<u32>,
}

impl ArenaConfig {
    /// Set the data file.
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the token lifetime (clamped to 1-720 hours).
    pub fn with_session_hours(mut self, hours: u32) -> Self {
        self.session_hours = hours.clamp(1, MAX_SESSION_HOURS);
        self
    }

    /// Set the bcrypt cost (clamped to 4-31).
    pub fn with_password_cost(mut self, cost: u32) -> Self {
        self.password_cost = cost.clamp(password::MIN_COST, password::MAX_COST);
        self
    }

    /// Overlay the keys present in a TOML document.
    pub fn merge_toml(mut self, text: &str) -> GameResult<Self> {
        let file: ConfigFile =
            toml::from_str(text).map_err(|e| GameError::Config(e.to_string()))?;
        if let Some(path) = file.data_file {
            self.data_file = path;
        }
        if let Some(seed) = file.seed {
            self.seed = Some(seed);
        }
        if let Some(hours) = file.session_hours {
            self = self.with_session_hours(hours);
        }
        if let Some(cost) = file.password_cost {
            self = self.with_password_cost(cost);
        }
        Ok(self)
    }

    /// Overlay a TOML file if it exists.
    pub fn merge_file(self, path: &Path) -> GameResult<Self> {
        if !path.exists() {
            return Ok(self);
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loading config file");
        self.merge_toml(&text)
    }

    /// Overlay environment variables.
    ///
    /// - `ARENA_DATA` - data file path
    /// - `ARENA_SEED` - RNG seed
    /// - `ARENA_SESSION_HOURS` - token lifetime in hours
    /// - `ARENA_PASSWORD_COST` - bcrypt cost for new hashes
    pub fn merge_env(self) -> GameResult<Self> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Overlay variables from an arbitrary lookup.
    pub fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> GameResult<Self> {
        if let Some(path) = lookup("ARENA_DATA").filter(|s| !s.is_empty()) {
            self.data_file = PathBuf::from(path);
        }
        if let Some(seed) = read_var::<u64>(&lookup, "ARENA_SEED")? {
            self.seed = Some(seed);
        }
        if let Some(hours) = read_var::<u32>(&lookup, "ARENA_SESSION_HOURS")? {
            self = self.with_session_hours(hours);
        }
        if let Some(cost) = read_var::<u32>(&lookup, "ARENA_PASSWORD_COST")? {
            self = self.with_password_cost(cost);
        }
        Ok(self)
    }

    /// Defaults, then `config_file` (or `arena.toml` beside the data file),
    /// then the environment.
    pub fn load(config_file: Option<&Path>) -> GameResult<Self> {
        let base = Self::default().merge_env()?;
        let file = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(GameError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => base.sibling_config_path(),
        };
        // Environment takes precedence over the file.
        base.merge_file(&file)?.merge_env()
    }

    /// Where `arena.toml` is looked for when no file is named.
    pub fn sibling_config_path(&self) -> PathBuf {
        self.data_file
            .parent()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> GameResult<Option<T>>
where
    T: std::str::FromStr,
{
    match lookup(key).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| GameError::Config(format!("{key}: cannot parse \"{raw}\""))),
    }
}

/// Platform data directory for Arena.
///
/// - Linux: `~/.local/share/arena`
/// - macOS: `~/Library/Application Support/arena`
/// - Windows: `%APPDATA%\arena`
/// - Fallback: `./arena-data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "arena")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./arena-data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let cfg = ArenaConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.session_hours, 24);
        assert_eq!(cfg.password_cost, 10);
        assert!(cfg.data_file.ends_with("arena.json"));
    }

    #[test]
    fn builder_methods() {
        let cfg = ArenaConfig::default()
            .with_seed(7)
            .with_data_file("/tmp/a.json")
            .with_session_hours(2);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.data_file, PathBuf::from("/tmp/a.json"));
        assert_eq!(cfg.session_hours, 2);
    }

    #[test]
    fn session_hours_clamped() {
        assert_eq!(ArenaConfig::default().with_session_hours(0).session_hours, 1);
        assert_eq!(
            ArenaConfig::default().with_session_hours(10_000).session_hours,
            MAX_SESSION_HOURS
        );
    }

    #[test]
    fn password_cost_clamped_to_bcrypt_range() {
        assert_eq!(ArenaConfig::default().with_password_cost(1).password_cost, 4);
        assert_eq!(ArenaConfig::default().with_password_cost(99).password_cost, 31);
        let cfg = ArenaConfig::default()
            .merge_vars(vars(&[("ARENA_PASSWORD_COST", "5")]))
            .unwrap();
        assert_eq!(cfg.password_cost, 5);
        let cfg = ArenaConfig::default().merge_toml("password_cost = 6\n").unwrap();
        assert_eq!(cfg.password_cost, 6);
    }

    #[test]
    fn toml_overrides_present_keys_only() {
        let cfg = ArenaConfig::default()
            .with_data_file("/tmp/a.json")
            .merge_toml("seed = 99\n")
            .unwrap();
        assert_eq!(cfg.seed, Some(99));
        assert_eq!(cfg.data_file, PathBuf::from("/tmp/a.json"));
        assert_eq!(cfg.session_hours, 24);
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        let err = ArenaConfig::default().merge_toml("sead = 1\n").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn env_vars_override() {
        let cfg = ArenaConfig::default()
            .merge_vars(vars(&[
                ("ARENA_DATA", "/srv/arena.json"),
                ("ARENA_SEED", "12"),
                ("ARENA_SESSION_HOURS", "48"),
            ]))
            .unwrap();
        assert_eq!(cfg.data_file, PathBuf::from("/srv/arena.json"));
        assert_eq!(cfg.seed, Some(12));
        assert_eq!(cfg.session_hours, 48);
    }

    #[test]
    fn bad_env_value_is_config_error() {
        let err = ArenaConfig::default()
            .merge_vars(vars(&[("ARENA_SEED", "lots")]))
            .unwrap_err();
        assert!(err.to_string().contains("ARENA_SEED"));
    }

    #[test]
    fn merge_file_reads_sibling_config() {
        let dir = TempDir::new().unwrap();
        let cfg = ArenaConfig::default().with_data_file(dir.path().join("arena.json"));
        let config_path = cfg.sibling_config_path();
        assert_eq!(config_path, dir.path().join(CONFIG_FILE_NAME));

        // Missing file is fine.
        let unchanged = cfg.clone().merge_file(&config_path).unwrap();
        assert_eq!(unchanged, cfg);

        std::fs::write(&config_path, "session_hours = 6\nseed = 3\n").unwrap();
        let merged = cfg.merge_file(&config_path).unwrap();
        assert_eq!(merged.session_hours, 6);
        assert_eq!(merged.seed, Some(3));
    }
}
