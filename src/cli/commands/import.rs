use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

use std::fs;

use super::open_store;

/// Replace the race list with a JSON export. A bad file leaves the
/// current races untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let text = fs::read_to_string(&path)
            .map_err(|e| AppError::Import(format!("cannot read {}: {}", path.display(), e)))?;

        let mut store = open_store(cfg)?;
        let count = store.import_all(&text)?;

        log::audit(
            store.storage().conn(),
            "import",
            &path.display().to_string(),
            &format!("Imported {} races", count),
        );

        success(format!("Imported {} races from {}.", count, path.display()));
    }

    Ok(())
}
