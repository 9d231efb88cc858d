use crate::errors::{AppError, AppResult};
use crate::models::zone2::Zone2Estimate;

/// Population estimate: max heart rate = 220 - age.
const MAX_HR_BASE: u32 = 220;
const ZONE2_LOW_PERCENT: u32 = 60;
const ZONE2_HIGH_PERCENT: u32 = 70;

pub struct Zone2Logic;

impl Zone2Logic {
    /// Estimate the Zone 2 range from raw form input.
    ///
    /// `age` is text so that a missing or non-numeric value is reported the
    /// same way as an empty name.
    pub fn estimate(name: &str, age: &str) -> AppResult<Zone2Estimate> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("please fill in your name".into()));
        }

        let age_str = age.trim();
        if age_str.is_empty() {
            return Err(AppError::Validation("please fill in your age".into()));
        }

        let age: u32 = age_str
            .parse()
            .map_err(|_| AppError::Validation(format!("age must be a whole number: {age_str}")))?;

        if age == 0 || age >= MAX_HR_BASE {
            return Err(AppError::Validation(format!(
                "age must be between 1 and {}: {}",
                MAX_HR_BASE - 1,
                age
            )));
        }

        let max_heart_rate = MAX_HR_BASE - age;

        Ok(Zone2Estimate {
            name: name.to_string(),
            age,
            max_heart_rate,
            zone_low: percent_of(max_heart_rate, ZONE2_LOW_PERCENT),
            zone_high: percent_of(max_heart_rate, ZONE2_HIGH_PERCENT),
        })
    }
}

/// `value * percent / 100`, rounded half to even in exact integer math.
fn percent_of(value: u32, percent: u32) -> u32 {
    let num = value * percent;
    let q = num / 100;
    let r = num % 100;

    match (2 * r).cmp(&100) {
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal => q + (q % 2),
        std::cmp::Ordering::Less => q,
    }
}
