//! Suitability Assessment Types
//!
//! Output structures for the suitability engine, capturing the result of
//! scoring one species against one environmental reading.

use serde::{Deserialize, Serialize};

use super::profiles::IrisSpecies;

/// Per-factor sub-scores (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScores {
    pub temperature: u8,
    /// Worse of the humidity and rainfall scores
    pub moisture: u8,
    pub soil: u8,
    pub light: u8,
}

/// Suitability of one species for one reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityScore {
    /// Display name ("Iris Setosa")
    pub species: String,

    pub species_key: IrisSpecies,

    /// Weighted overall score (0-100)
    pub score: u8,

    pub factors: FactorScores,

    /// Suggested interventions, in factor order
    pub recommendations: Vec<String>,

    /// Problems found, in factor order
    pub challenges: Vec<String>,
}

impl SuitabilityScore {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// True when no factor needed attention
    pub fn is_favorable(&self) -> bool {
        self.challenges.is_empty()
    }
}

/// Coarse rating used when presenting scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreBand {
    /// 80 and above
    Excellent,
    /// 60-79
    Moderate,
    /// Below 60
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Poor
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Moderate => "Moderate",
            ScoreBand::Poor => "Poor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Conditions closely match where this species thrives",
            ScoreBand::Moderate => "Growing is possible with some adjustments",
            ScoreBand::Poor => "Conditions differ significantly from this species' optimum",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Poor);
    }
}
