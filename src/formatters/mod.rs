pub mod markdown;
pub mod json;
pub mod html;

pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
pub use html::HtmlFormatter;

use serde::{Deserialize, Serialize};

use crate::suitability::{EnvironmentalReading, SuitabilityScore};

/// A reading together with its species ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityReport {
    pub reading: EnvironmentalReading,
    pub rankings: Vec<SuitabilityScore>,
}

impl SuitabilityReport {
    pub fn new(reading: EnvironmentalReading, rankings: Vec<SuitabilityScore>) -> Self {
        Self { reading, rankings }
    }

    /// Best-suited species, if any were scored
    pub fn best(&self) -> Option<&SuitabilityScore> {
        self.rankings.first()
    }
}
