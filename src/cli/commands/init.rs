use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

use super::open_store;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its migrations
///  - the race list, seeded with two example races when empty
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing runcalc…");
    info(format!("Database: {}", &cfg.database));

    let store = open_store(&cfg)?;

    for version in store.storage().applied_migrations() {
        success(format!("Migration applied: {}", version));
    }

    log::audit(
        store.storage().conn(),
        "init",
        &cfg.storage_key,
        &format!(
            "Database initialized at {} ({} races)",
            &cfg.database,
            store.len()
        ),
    );

    success(format!(
        "runcalc initialization completed: {} races stored.",
        store.len()
    ));
    Ok(())
}
