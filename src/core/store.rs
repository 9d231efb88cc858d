//! The race list: an in-memory collection mirrored to [`Storage`].
//!
//! Every mutating operation is applied to the collection and then written
//! back under the store key. When the write fails the collection is
//! restored to what it was before the call and the error is returned, so
//! memory and storage never disagree.

use crate::core::exchange;
use crate::core::filter::RaceFilter;
use crate::core::seed::default_races;
use crate::errors::{AppError, AppResult};
use crate::models::countdown::Countdown;
use crate::models::race::{Race, RaceDraft};
use crate::storage::Storage;
use chrono::{NaiveDateTime, TimeDelta, Utc};
use std::collections::HashSet;

pub struct RaceStore<S: Storage> {
    storage: S,
    key: String,
    races: Vec<Race>,
    last_issued: i64,
}

impl<S: Storage> RaceStore<S> {
    /// Load the collection stored under `key`.
    ///
    /// A missing key seeds the default races and persists them right away.
    /// Stored records go through the same checks as an import. A key that
    /// holds something unreadable or invalid is an error: the seed never
    /// overwrites existing data.
    pub fn load(storage: S, key: &str) -> AppResult<Self> {
        let stored = storage.read(key)?;

        let mut store = Self {
            storage,
            key: key.to_string(),
            races: Vec::new(),
            last_issued: 0,
        };

        match stored {
            Some(text) => {
                store.races = parse_stored(&text).map_err(|e| {
                    let reason = match e {
                        AppError::Import(msg) => msg,
                        other => other.to_string(),
                    };
                    AppError::Storage(format!("stored races under '{}' are unreadable: {}", key, reason))
                })?;
            }
            None => {
                store.races = default_races();
                store.save()?;
            }
        }

        Ok(store)
    }

    /// Write the whole collection under the store key.
    pub fn save(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.races)?;
        self.storage.write(&self.key, &json)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// All races, in no particular order.
    pub fn races(&self) -> &[Race] {
        &self.races
    }

    pub fn len(&self) -> usize {
        self.races.len()
    }

    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Race> {
        self.races.iter().find(|r| r.id == id)
    }

    /// Races matching `filter`, sorted by date.
    pub fn list(&self, filter: &RaceFilter) -> Vec<Race> {
        let mut out: Vec<Race> = self
            .races
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        exchange::sort_races(&mut out);
        out
    }

    pub fn create(&mut self, draft: RaceDraft) -> AppResult<Race> {
        let id = self.fresh_id(&HashSet::new());
        let race = draft.into_race(id)?;

        let snapshot = self.races.clone();
        self.races.push(race.clone());
        self.commit(snapshot)?;

        Ok(race)
    }

    /// Replace every field of race `id` except the id itself.
    pub fn update(&mut self, id: &str, draft: RaceDraft) -> AppResult<Race> {
        let pos = self
            .races
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        let race = draft.into_race(id.to_string())?;

        let snapshot = self.races.clone();
        self.races[pos] = race.clone();
        self.commit(snapshot)?;

        Ok(race)
    }

    /// Remove race `id`. Returns `false`, without touching storage, when
    /// no such race exists.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let Some(pos) = self.races.iter().position(|r| r.id == id) else {
            return Ok(false);
        };

        let snapshot = self.races.clone();
        self.races.remove(pos);
        self.commit(snapshot)?;

        Ok(true)
    }

    /// The whole collection as pretty JSON.
    pub fn export_all(&self) -> AppResult<String> {
        exchange::to_json(&self.races)
    }

    /// Replace the whole collection with the races in `text`.
    ///
    /// The payload is checked completely before anything changes; on any
    /// error the current collection stays as it is. Records without an id
    /// get a fresh one. Returns the number of imported races.
    pub fn import_all(&mut self, text: &str) -> AppResult<usize> {
        let checked = exchange::check_records(exchange::parse_import(text)?)?;
        let mut taken: HashSet<String> = checked.iter().filter_map(|(id, _)| id.clone()).collect();

        let mut races = Vec::with_capacity(checked.len());
        for (id, mut race) in checked {
            if id.is_none() {
                race.id = self.fresh_id(&taken);
                taken.insert(race.id.clone());
            }
            races.push(race);
        }

        let count = races.len();
        let snapshot = std::mem::replace(&mut self.races, races);
        self.commit(snapshot)?;

        Ok(count)
    }

    /// The earliest race starting strictly after `now`, with the whole
    /// days left (rounded up).
    pub fn next_race_countdown(&self, now: NaiveDateTime) -> Option<Countdown> {
        let next = self
            .races
            .iter()
            .filter(|r| r.is_upcoming(now))
            .min_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)))?;

        let left = next.starts_at() - now;
        let mut days = left.num_days();
        if left > TimeDelta::days(days) {
            days += 1;
        }

        Some(Countdown {
            race_id: next.id.clone(),
            race_name: next.name.clone(),
            days,
        })
    }

    /// Persist, or roll back to `snapshot` if persisting fails.
    fn commit(&mut self, snapshot: Vec<Race>) -> AppResult<()> {
        if let Err(e) = self.save() {
            self.races = snapshot;
            return Err(e);
        }
        Ok(())
    }

    /// Millisecond timestamp ids, bumped past anything already issued or
    /// in use.
    fn fresh_id(&mut self, reserved: &HashSet<String>) -> String {
        let mut candidate = Utc::now().timestamp_millis().max(self.last_issued + 1);

        loop {
            let id = candidate.to_string();
            if !reserved.contains(&id) && self.get(&id).is_none() {
                self.last_issued = candidate;
                return id;
            }
            candidate += 1;
        }
    }
}

/// Decode a stored collection. Every record must be valid and carry an id
/// of its own.
fn parse_stored(text: &str) -> AppResult<Vec<Race>> {
    exchange::check_records(exchange::parse_import(text)?)?
        .into_iter()
        .enumerate()
        .map(|(i, (id, race))| match id {
            Some(_) => Ok(race),
            None => Err(AppError::Import(format!("record {}: missing id", i + 1))),
        })
        .collect()
}
