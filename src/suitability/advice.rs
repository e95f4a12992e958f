//! Advice Generation
//!
//! Turns low-scoring factors into a recommendation/challenge pair. The
//! direction of the advice depends on which side of the ideal the reading
//! falls, not on which bound it crossed.

use serde::{Deserialize, Serialize};

use super::profiles::{OptimalRange, SpeciesProfile};
use super::reading::EnvironmentalReading;

/// Single recommendation emitted when every factor is acceptable
pub const FAVORABLE_RECOMMENDATION: &str = "conditions are already favorable";

/// A measured quantity that can trigger advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Temperature,
    Humidity,
    Rainfall,
    SoilPh,
    Sunlight,
}

impl Factor {
    /// Advice order
    pub const ALL: [Factor; 5] = [
        Factor::Temperature,
        Factor::Humidity,
        Factor::Rainfall,
        Factor::SoilPh,
        Factor::Sunlight,
    ];

    pub fn display_text(&self) -> &'static str {
        match self {
            Factor::Temperature => "Temperature",
            Factor::Humidity => "Humidity",
            Factor::Rainfall => "Rainfall",
            Factor::SoilPh => "Soil pH",
            Factor::Sunlight => "Sunlight",
        }
    }

    /// Reading value for this factor
    pub fn value(&self, reading: &EnvironmentalReading) -> f64 {
        match self {
            Factor::Temperature => reading.temperature,
            Factor::Humidity => reading.humidity,
            Factor::Rainfall => reading.rainfall,
            Factor::SoilPh => reading.soil_ph,
            Factor::Sunlight => reading.sunlight_hours,
        }
    }

    /// Species range for this factor
    pub fn range<'a>(&self, profile: &'a SpeciesProfile) -> &'a OptimalRange {
        match self {
            Factor::Temperature => &profile.temperature,
            Factor::Humidity => &profile.humidity,
            Factor::Rainfall => &profile.rainfall,
            Factor::SoilPh => &profile.soil_ph,
            Factor::Sunlight => &profile.sunlight,
        }
    }
}

/// Side of the ideal a reading falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    BelowIdeal,
    /// At or above the ideal
    AboveIdeal,
}

impl Direction {
    pub fn of(value: f64, ideal: f64) -> Self {
        if value < ideal {
            Direction::BelowIdeal
        } else {
            Direction::AboveIdeal
        }
    }
}

/// Advice for one measured quantity behind a low-scoring factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub factor: Factor,
    pub direction: Direction,
}

impl Advisory {
    /// Build the advisory for a factor from the raw reading
    pub fn for_factor(factor: Factor, reading: &EnvironmentalReading, profile: &SpeciesProfile) -> Self {
        let direction = Direction::of(factor.value(reading), factor.range(profile).ideal);
        Self { factor, direction }
    }

    pub fn recommendation(&self) -> &'static str {
        use Direction::*;
        match (self.factor, self.direction) {
            (Factor::Temperature, BelowIdeal) => "Consider greenhouse cultivation or wait for warmer seasons",
            (Factor::Temperature, AboveIdeal) => "Provide shade during hottest parts of day",
            (Factor::Humidity, BelowIdeal) => "Increase humidity with misting or humidity trays",
            (Factor::Humidity, AboveIdeal) => "Improve air circulation to reduce excess humidity",
            (Factor::Rainfall, BelowIdeal) => "Supplement with regular watering",
            (Factor::Rainfall, AboveIdeal) => "Improve drainage with raised beds or gravel",
            (Factor::SoilPh, BelowIdeal) => "Add lime to raise soil pH",
            (Factor::SoilPh, AboveIdeal) => "Add organic matter to lower soil pH",
            (Factor::Sunlight, BelowIdeal) => "Choose sunnier location or trim surrounding vegetation",
            (Factor::Sunlight, AboveIdeal) => "Provide afternoon shade",
        }
    }

    pub fn challenge(&self) -> &'static str {
        use Direction::*;
        match (self.factor, self.direction) {
            (Factor::Temperature, BelowIdeal) => "Temperature too low for optimal growth",
            (Factor::Temperature, AboveIdeal) => "Temperature may be too high",
            (Factor::Humidity, BelowIdeal) => "Low humidity levels",
            (Factor::Humidity, AboveIdeal) => "Humidity levels too high",
            (Factor::Rainfall, BelowIdeal) => "Insufficient natural rainfall",
            (Factor::Rainfall, AboveIdeal) => "Excess rainfall may waterlog roots",
            (Factor::SoilPh, BelowIdeal) => "Soil too acidic",
            (Factor::SoilPh, AboveIdeal) => "Soil too alkaline",
            (Factor::Sunlight, BelowIdeal) => "Insufficient sunlight",
            (Factor::Sunlight, AboveIdeal) => "Too much direct sunlight",
        }
    }
}

/// Collect recommendations and challenges for the given advisories
///
/// An empty advisory list yields the single favorable recommendation.
pub fn compile_advice(advisories: &[Advisory]) -> (Vec<String>, Vec<String>) {
    if advisories.is_empty() {
        return (vec![FAVORABLE_RECOMMENDATION.to_string()], Vec::new());
    }

    let recommendations = advisories.iter().map(|a| a.recommendation().to_string()).collect();
    let challenges = advisories.iter().map(|a| a.challenge().to_string()).collect();
    (recommendations, challenges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suitability::profiles::{profile, IrisSpecies};

    #[test]
    fn test_direction_from_ideal() {
        assert_eq!(Direction::of(4.0, 5.0), Direction::BelowIdeal);
        assert_eq!(Direction::of(5.0, 5.0), Direction::AboveIdeal);
        assert_eq!(Direction::of(30.0, 5.0), Direction::AboveIdeal);
    }

    #[test]
    fn test_advisory_uses_raw_value_not_bound() {
        let setosa = profile(IrisSpecies::Setosa);
        // 7.0 pH is within range but above the 6.2 ideal
        let reading = EnvironmentalReading { soil_ph: 7.0, ..Default::default() };
        let advisory = Advisory::for_factor(Factor::SoilPh, &reading, setosa);
        assert_eq!(advisory.direction, Direction::AboveIdeal);
        assert_eq!(advisory.challenge(), "Soil too alkaline");
        assert_eq!(advisory.recommendation(), "Add organic matter to lower soil pH");
    }

    #[test]
    fn test_every_pair_has_distinct_messages() {
        for factor in Factor::ALL {
            let low = Advisory { factor, direction: Direction::BelowIdeal };
            let high = Advisory { factor, direction: Direction::AboveIdeal };
            assert_ne!(low.recommendation(), high.recommendation());
            assert_ne!(low.challenge(), high.challenge());
        }
    }

    #[test]
    fn test_compile_advice_empty_is_favorable() {
        let (recommendations, challenges) = compile_advice(&[]);
        assert_eq!(recommendations, vec![FAVORABLE_RECOMMENDATION.to_string()]);
        assert!(challenges.is_empty());
    }

    #[test]
    fn test_compile_advice_keeps_order() {
        let advisories = [
            Advisory { factor: Factor::Temperature, direction: Direction::AboveIdeal },
            Advisory { factor: Factor::Rainfall, direction: Direction::BelowIdeal },
        ];
        let (recommendations, challenges) = compile_advice(&advisories);
        assert_eq!(recommendations, vec![
            "Provide shade during hottest parts of day".to_string(),
            "Supplement with regular watering".to_string(),
        ]);
        assert_eq!(challenges, vec![
            "Temperature may be too high".to_string(),
            "Insufficient natural rainfall".to_string(),
        ]);
    }
}
