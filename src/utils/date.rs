use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Local wall-clock time, the reference for countdowns.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a countdown reference: `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or
/// `YYYY-MM-DD HH:MM` (seconds optional). A bare date means midnight.
pub fn parse_reference(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let dt_formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    parse_date(s).map(|d| d.and_time(NaiveTime::MIN))
}

/// e.g. "Saturday, 18 October 2025 09:30"
pub fn format_long(dt: &NaiveDateTime) -> String {
    dt.format("%A, %-d %B %Y %H:%M").to_string()
}
