use crate::errors::{AppError, AppResult};
use crate::models::race_type::RaceType;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_refresh_secs")]
    pub countdown_refresh_secs: u64,
    #[serde(default = "default_race_type")]
    pub default_race_type: RaceType,
}

fn default_storage_key() -> String {
    "races".to_string()
}
fn default_refresh_secs() -> u64 {
    60
}
fn default_race_type() -> RaceType {
    RaceType::Road
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            storage_key: default_storage_key(),
            countdown_refresh_secs: default_refresh_secs(),
            default_race_type: default_race_type(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.runcalc`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".runcalc")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("runcalc.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("runcalc.sqlite")
    }

    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))?;

        if cfg.countdown_refresh_secs == 0 {
            return Err(AppError::Config(
                "countdown_refresh_secs must be at least 1".into(),
            ));
        }

        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create the config directory and, unless `is_test`, write the config
    /// file. `custom_db` overrides the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => expand_tilde(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}
