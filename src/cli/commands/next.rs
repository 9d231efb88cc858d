use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::countdown;
use crate::utils::date;

use std::thread;
use std::time::Duration;

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Next { at, watch, ticks } = cmd {
        let store = open_store(cfg)?;

        if !*watch {
            let reference = match at {
                Some(s) => date::parse_reference(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => date::now(),
            };
            println!("{}", countdown::describe(store.next_race_countdown(reference).as_ref()));
            return Ok(());
        }

        // Foreground refresh loop; Ctrl+C to stop.
        let interval = Duration::from_secs(cfg.countdown_refresh_secs);
        let mut done: u64 = 0;
        loop {
            let now = date::now();
            println!(
                "[{}] {}",
                now.format("%Y-%m-%d %H:%M"),
                countdown::describe(store.next_race_countdown(now).as_ref())
            );

            done += 1;
            if ticks.is_some_and(|n| done >= n) {
                break;
            }
            thread::sleep(interval);
        }
    }

    Ok(())
}
