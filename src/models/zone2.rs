use serde::Serialize;

/// Estimated Zone 2 range for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone2Estimate {
    pub name: String,
    pub age: u32,
    pub max_heart_rate: u32, // bpm
    pub zone_low: u32,       // bpm
    pub zone_high: u32,      // bpm
}

impl Zone2Estimate {
    /// Paragraph shown to the user, wrapped to `width` columns.
    pub fn message(&self, width: usize) -> String {
        let paragraphs = [
            format!(
                "Dear {}, the most efficient cardiovascular exercise for burning calories happens in Zone 2.",
                self.name
            ),
            format!(
                "Based on the information provided, your estimated maximum heart rate is {} bpm.",
                self.max_heart_rate
            ),
            format!(
                "Your ideal Zone 2 range is between {} and {} bpm.",
                self.zone_low, self.zone_high
            ),
            "Take care of your health and well-being!".to_string(),
        ];

        paragraphs
            .iter()
            .map(|p| textwrap::fill(p, width))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
