use serde::Serialize;
use std::fmt;

/// Days left until the next race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub race_id: String,
    pub race_name: String,
    pub days: i64,
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.days == 1 { "day" } else { "days" };
        write!(f, "{} {} until {}", self.days, unit, self.race_name)
    }
}

pub const NO_UPCOMING_RACES: &str = "No upcoming races";

/// Render an optional countdown the way the CLI shows it.
pub fn describe(countdown: Option<&Countdown>) -> String {
    countdown
        .map(|c| c.to_string())
        .unwrap_or_else(|| NO_UPCOMING_RACES.to_string())
}
