use super::race_type::RaceType;
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A race as stored and exported.
///
/// Field names on the wire: `id`, `name`, `location`, `distance`, `date`,
/// `type`, `eventLink`, `notes`, `image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: String,
    pub name: String,
    pub location: String,
    pub distance: f64, // km
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: RaceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Picture URL (or data URL) shown with the race.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Race {
    /// Start of the race day, used for countdowns.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(chrono::NaiveTime::MIN)
    }

    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.starts_at() > now
    }

    /// The editable part of the record, e.g. to prefill an edit.
    pub fn to_draft(&self) -> RaceDraft {
        RaceDraft {
            name: self.name.clone(),
            location: self.location.clone(),
            distance: Some(self.distance),
            date: Some(self.date),
            kind: self.kind,
            event_link: self.event_link.clone(),
            notes: self.notes.clone(),
            image: self.image.clone(),
        }
    }

    /// Same user-visible content, ignoring the id.
    pub fn same_fields(&self, other: &Race) -> bool {
        self.name == other.name
            && self.location == other.location
            && self.distance == other.distance
            && self.date == other.date
            && self.kind == other.kind
            && self.event_link == other.event_link
            && self.notes == other.notes
            && self.image == other.image
    }
}

/// User input for a create or an update. Nothing is trusted until
/// [`RaceDraft::into_race`] has run.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceDraft {
    pub name: String,
    pub location: String,
    pub distance: Option<f64>,
    pub date: Option<NaiveDate>,
    pub kind: RaceType,
    pub event_link: Option<String>,
    pub notes: Option<String>,
    pub image: Option<String>,
}

impl RaceDraft {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        distance: f64,
        date: NaiveDate,
        kind: RaceType,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            distance: Some(distance),
            date: Some(date),
            kind,
            event_link: None,
            notes: None,
            image: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.event_link = Some(link.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Validate the draft and build the stored record.
    pub fn into_race(self, id: String) -> AppResult<Race> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("race name is required".into()));
        }

        let location = self.location.trim().to_string();
        if location.is_empty() {
            return Err(AppError::Validation("race location is required".into()));
        }

        let distance = self
            .distance
            .ok_or_else(|| AppError::Validation("race distance is required".into()))?;
        if !distance.is_finite() || distance < 0.0 {
            return Err(AppError::Validation(format!(
                "race distance must be a non-negative number of km, got {}",
                distance
            )));
        }

        let date = self
            .date
            .ok_or_else(|| AppError::Validation("race date is required".into()))?;

        let event_link = non_blank(self.event_link);
        if let Some(link) = &event_link {
            check_link(link)?;
        }

        Ok(Race {
            id,
            name,
            location,
            distance,
            date,
            kind: self.kind,
            event_link,
            notes: non_blank(self.notes),
            image: non_blank(self.image),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("valid link pattern"));

fn check_link(link: &str) -> AppResult<()> {
    if LINK_RE.is_match(link) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "event link must be an http(s) URL: {}",
            link
        )))
    }
}
