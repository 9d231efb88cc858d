pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod next;
pub mod zone2;

use crate::config::Config;
use crate::core::store::RaceStore;
use crate::db::SqliteStorage;
use crate::errors::{AppError, AppResult};
use crate::models::race_type::RaceType;

/// Open the configured database and load the race list from it.
pub(crate) fn open_store(cfg: &Config) -> AppResult<RaceStore<SqliteStorage>> {
    let storage = SqliteStorage::open(&cfg.database)?;
    RaceStore::load(storage, &cfg.storage_key)
}

pub(crate) fn parse_race_type(code: &str) -> AppResult<RaceType> {
    RaceType::from_code(code).ok_or_else(|| {
        AppError::Validation(format!(
            "invalid race type '{}'. Use 'road' or 'trail'",
            code
        ))
    })
}
