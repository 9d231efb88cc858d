use crate::models::race::Race;
use crate::models::race_type::TypeFilter;

/// Search criteria for [`RaceStore::list`](crate::core::store::RaceStore::list).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceFilter {
    /// Case-insensitive substring of the name or the location. Empty matches all.
    pub text: String,
    pub kind: TypeFilter,
}

impl RaceFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TypeFilter::All,
        }
    }

    pub fn with_kind(mut self, kind: TypeFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn matches(&self, race: &Race) -> bool {
        let needle = self.text.trim().to_lowercase();
        let matches_text = needle.is_empty()
            || race.name.to_lowercase().contains(&needle)
            || race.location.to_lowercase().contains(&needle);

        matches_text && self.kind.matches(race.kind)
    }
}
