use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::models::race::RaceDraft;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::format_distance;

use super::{open_store, parse_race_type};

/// Add a race.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        location,
        distance,
        date: date_str,
        kind,
        link,
        notes,
        image,
    } = cmd
    {
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        let kind = match kind {
            Some(code) => parse_race_type(code)?,
            None => cfg.default_race_type,
        };

        let draft = RaceDraft {
            name: name.clone(),
            location: location.clone(),
            distance: Some(*distance),
            date: Some(d),
            kind,
            event_link: link.clone(),
            notes: notes.clone(),
            image: image.clone(),
        };

        let mut store = open_store(cfg)?;
        let race = store.create(draft)?;

        log::audit(
            store.storage().conn(),
            "add",
            &race.id,
            &format!("Added race '{}' on {}", race.name, race.date),
        );

        success(format!(
            "Added race #{}: {} ({}, {}, {}) on {}.",
            race.id,
            race.name,
            race.location,
            format_distance(race.distance),
            race.kind,
            race.date
        ));
    }

    Ok(())
}
