use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

use super::{open_store, parse_race_type};

/// Edit a race: start from the stored record, apply the given fields,
/// then replace it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        location,
        distance,
        date: date_str,
        kind,
        link,
        notes,
        clear_link,
        image,
        clear_notes,
        clear_image,
    } = cmd
    {
        let mut store = open_store(cfg)?;

        let mut draft = store
            .get(id)
            .ok_or_else(|| AppError::NotFound(id.clone()))?
            .to_draft();

        if let Some(n) = name {
            draft.name = n.clone();
        }
        if let Some(l) = location {
            draft.location = l.clone();
        }
        if let Some(km) = distance {
            draft.distance = Some(*km);
        }
        if let Some(s) = date_str {
            let d = date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
            draft.date = Some(d);
        }
        if let Some(code) = kind {
            draft.kind = parse_race_type(code)?;
        }
        if *clear_link {
            draft.event_link = None;
        } else if let Some(url) = link {
            draft.event_link = Some(url.clone());
        }
        if *clear_notes {
            draft.notes = None;
        } else if let Some(text) = notes {
            draft.notes = Some(text.clone());
        }
        if *clear_image {
            draft.image = None;
        } else if let Some(url) = image {
            draft.image = Some(url.clone());
        }

        let race = store.update(id, draft)?;

        log::audit(
            store.storage().conn(),
            "edit",
            &race.id,
            &format!("Updated race '{}'", race.name),
        );

        success(format!("Race #{} updated: {} on {}.", race.id, race.name, race.date));
    }

    Ok(())
}
