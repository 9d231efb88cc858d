use serde::{Deserialize, Serialize};
use std::fmt;

/// Surface of a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceType {
    // Older exports label road races "Asfalto".
    #[serde(alias = "Asfalto")]
    Road,
    Trail,
}

impl RaceType {
    pub fn label(&self) -> &'static str {
        match self {
            RaceType::Road => "Road",
            RaceType::Trail => "Trail",
        }
    }

    /// Helper: convert input code from CLI (any case, short or long form)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "road" | "r" | "asfalto" => Some(RaceType::Road),
            "trail" | "t" => Some(RaceType::Trail),
            _ => None,
        }
    }
}

impl fmt::Display for RaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Type criterion used by `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(RaceType),
}

impl TypeFilter {
    pub fn from_code(code: &str) -> Option<Self> {
        if code.trim().eq_ignore_ascii_case("all") {
            return Some(TypeFilter::All);
        }
        RaceType::from_code(code).map(TypeFilter::Only)
    }

    pub fn matches(&self, kind: RaceType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(k) => *k == kind,
        }
    }
}
