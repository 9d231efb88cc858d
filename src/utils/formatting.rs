//! Formatting utilities used for CLI outputs.

/// Distance without a trailing ".0": 42.195 → "42.195 km", 174 → "174 km".
pub fn format_distance(km: f64) -> String {
    if km.fract() == 0.0 {
        format!("{:.0} km", km)
    } else {
        format!("{} km", km)
    }
}

pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}
