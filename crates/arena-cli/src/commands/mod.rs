pub mod account;
pub mod battle;
pub mod history;
pub mod init;
pub mod roster;

use std::path::PathBuf;

use arena_game::{Arena, ArenaConfig};
use arena_store::Store;

/// Global flags shared by every command.
pub struct Context {
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    token: Option<String>,
}

impl Context {
    pub fn new(data: Option<PathBuf>, config: Option<PathBuf>, token: Option<String>) -> Self {
        Self {
            data,
            config,
            token,
        }
    }

    /// Resolve the configuration. `--data` also moves where `arena.toml`
    /// is looked for.
    pub fn config(&self) -> Result<ArenaConfig, String> {
        let config_file = match (&self.config, &self.data) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(data)) => Some(
                ArenaConfig::default()
                    .with_data_file(data)
                    .sibling_config_path(),
            )
            .filter(|path| path.exists()),
            (None, None) => None,
        };

        let mut config = ArenaConfig::load(config_file.as_deref()).map_err(|e| e.to_string())?;
        if let Some(data) = &self.data {
            config = config.with_data_file(data);
        }
        Ok(config)
    }

    /// Open the store and wrap it in the game service.
    pub fn open(&self) -> Result<Arena<Store>, String> {
        let config = self.config()?;
        tracing::debug!(data = %config.data_file.display(), "opening store");
        let store = Store::open(&config.data_file)
            .map_err(|e| format!("cannot open {}: {e}", config.data_file.display()))?;
        Ok(Arena::new(store, config))
    }

    /// The login token, or an error telling the user how to get one.
    pub fn token(&self) -> Result<&str, String> {
        self.token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                "not logged in; run `arena login` and pass --token or set ARENA_TOKEN".to_string()
            })
    }
}
