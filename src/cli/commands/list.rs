use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::RaceFilter;
use crate::errors::{AppError, AppResult};
use crate::models::countdown;
use crate::models::race::Race;
use crate::models::race_type::TypeFilter;
use crate::utils::date;
use crate::utils::formatting::{format_distance, or_dash};
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::NaiveDateTime;

use super::open_store;

const UPCOMING: &str = "▶";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { search, kind } = cmd {
        let kind = TypeFilter::from_code(kind).ok_or_else(|| {
            AppError::Validation(format!(
                "invalid type filter '{}'. Use 'all', 'road' or 'trail'",
                kind
            ))
        })?;

        let filter = RaceFilter::text(search.clone().unwrap_or_default()).with_kind(kind);

        let store = open_store(cfg)?;
        let races = store.list(&filter);
        let now = date::now();

        println!("🕒 {}", date::format_long(&now));
        println!(
            "🏁 {}\n",
            countdown::describe(store.next_race_countdown(now).as_ref())
        );

        if races.is_empty() {
            println!("No races found.");
            return Ok(());
        }

        print!("{}", render(&races, now));
        println!("\n{} race(s)", races.len());
    }

    Ok(())
}

fn render(races: &[Race], now: NaiveDateTime) -> String {
    let mut table = Table::new(vec![
        Column::new(""),
        Column::new("ID"),
        Column::new("DATE"),
        Column::new("NAME").max(40),
        Column::new("LOCATION").max(24),
        Column::new("TYPE"),
        Column::new("DISTANCE"),
        Column::new("LINK").max(40),
        Column::new("NOTES").max(40),
    ]);

    for r in races {
        let marker = if r.is_upcoming(now) { UPCOMING } else { "" };
        table.add_row(vec![
            marker.to_string(),
            r.id.clone(),
            r.date.format("%Y-%m-%d").to_string(),
            r.name.clone(),
            r.location.clone(),
            r.kind.label().to_string(),
            format_distance(r.distance),
            or_dash(r.event_link.as_deref()),
            or_dash(r.notes.as_deref()),
        ]);
    }

    // Colour the marker after widths are computed.
    table
        .render()
        .lines()
        .map(|line| match line.strip_prefix(UPCOMING) {
            Some(rest) => format!("{}{}\n", Colour::Purple.bold().paint(UPCOMING), rest),
            None => format!("{}\n", line),
        })
        .collect()
}
