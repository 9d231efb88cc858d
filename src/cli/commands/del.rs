use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg)?;

        let Some(race) = store.get(id).cloned() else {
            warning(format!("No race with id {}. Nothing deleted.", id));
            return Ok(());
        };

        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = format!(
                "Delete race #{} '{}' ({})? This action is irreversible.",
                race.id, race.name, race.date
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        if store.delete(id)? {
            log::audit(
                store.storage().conn(),
                "del",
                id,
                &format!("Deleted race '{}'", race.name),
            );
            success(format!("Race #{} '{}' has been deleted.", race.id, race.name));
        }
    }

    Ok(())
}
