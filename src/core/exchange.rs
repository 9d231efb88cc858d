//! Import / export formats for the race collection.

use crate::errors::{AppError, AppResult};
use crate::models::race::{Race, RaceDraft};
use crate::models::race_type::RaceType;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Header for CSV export.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "name",
        "location",
        "distance",
        "date",
        "type",
        "eventLink",
        "notes",
    ]
}

/// Races in presentation order: by date, then name, then id.
pub(crate) fn sort_races(races: &mut [Race]) {
    races.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Pretty JSON (2-space indent), the format shared by export and import.
pub fn to_json(races: &[Race]) -> AppResult<String> {
    let mut sorted = races.to_vec();
    sort_races(&mut sorted);
    Ok(serde_json::to_string_pretty(&sorted)?)
}

/// Write one CSV row per race. CSV is export-only.
pub fn write_csv<W: Write>(races: &[Race], writer: W) -> AppResult<()> {
    let mut sorted = races.to_vec();
    sort_races(&mut sorted);

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(get_headers())?;

    for r in &sorted {
        wtr.write_record([
            r.id.clone(),
            r.name.clone(),
            r.location.clone(),
            r.distance.to_string(),
            r.date.format("%Y-%m-%d").to_string(),
            r.kind.label().to_string(),
            r.event_link.clone().unwrap_or_default(),
            r.notes.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// One record of an import file. Every field but `id` and the optional
/// ones must be present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImportedRace {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    pub distance: f64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: RaceType,
    #[serde(default)]
    pub event_link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ImportedRace {
    /// Validate like a user submission. The id is filled in by the caller
    /// when the file did not carry one.
    pub fn into_race(self, index: usize) -> AppResult<(Option<String>, Race)> {
        let id = self
            .id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let draft = RaceDraft {
            name: self.name,
            location: self.location,
            distance: Some(self.distance),
            date: Some(self.date),
            kind: self.kind,
            event_link: self.event_link,
            notes: self.notes,
            image: self.image,
        };

        let race = draft
            .into_race(id.clone().unwrap_or_default())
            .map_err(|e| match e {
                AppError::Validation(msg) => AppError::Import(format!("record {}: {}", index + 1, msg)),
                other => other,
            })?;

        Ok((id, race))
    }
}

/// Validate every record and reject ids that appear twice. Records without
/// an id come back with `None`.
pub(crate) fn check_records(records: Vec<ImportedRace>) -> AppResult<Vec<(Option<String>, Race)>> {
    let mut checked = Vec::with_capacity(records.len());
    let mut seen: HashSet<String> = HashSet::new();

    for (i, rec) in records.into_iter().enumerate() {
        let (id, race) = rec.into_race(i)?;
        if let Some(id) = &id
            && !seen.insert(id.clone())
        {
            return Err(AppError::Import(format!("duplicate race id '{}'", id)));
        }
        checked.push((id, race));
    }

    Ok(checked)
}

/// Parse an import payload. Nothing is validated beyond the JSON shape here.
pub(crate) fn parse_import(text: &str) -> AppResult<Vec<ImportedRace>> {
    serde_json::from_str::<Vec<ImportedRace>>(text)
        .map_err(|e| AppError::Import(format!("not a valid race list: {}", e)))
}
