use crate::models::race::Race;
use crate::models::race_type::RaceType;
use chrono::NaiveDate;

/// Races written to storage the first time the store is opened.
pub fn default_races() -> Vec<Race> {
    vec![
        Race {
            id: "1".to_string(),
            name: "UTMB - Chamonix".to_string(),
            location: "Suiça".to_string(),
            distance: 174.0,
            date: ymd(2025, 9, 1),
            kind: RaceType::Trail,
            event_link: None,
            notes: None,
            image: None,
        },
        Race {
            id: "2".to_string(),
            name: "Evolution Itatiaia National Park".to_string(),
            location: "Brasil".to_string(),
            distance: 130.0,
            date: ymd(2025, 12, 1),
            kind: RaceType::Trail,
            event_link: None,
            notes: None,
            image: None,
        },
    ]
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
