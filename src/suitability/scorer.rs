//! Suitability Scorer - combines factor scores and ranks species
//!
//! Pure and synchronous: the same reading always yields the same ranking.

use super::advice::{compile_advice, Advisory, Factor};
use super::assessment::{FactorScores, SuitabilityScore};
use super::comparator::{clamp_score, score_factor};
use super::profiles::{SpeciesProfile, SPECIES_PROFILES};
use super::reading::EnvironmentalReading;
use crate::config::ScoringConfig;

/// Scores readings against the species profile table
#[derive(Debug, Clone, Default)]
pub struct SuitabilityScorer {
    config: ScoringConfig,
}

impl SuitabilityScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one species against a reading
    pub fn score_species(&self, profile: &SpeciesProfile, reading: &EnvironmentalReading) -> SuitabilityScore {
        let factor_score = |factor: Factor| score_factor(factor.value(reading), factor.range(profile));

        let temperature = factor_score(Factor::Temperature);
        let humidity = factor_score(Factor::Humidity);
        let rainfall = factor_score(Factor::Rainfall);
        let soil = factor_score(Factor::SoilPh);
        let light = factor_score(Factor::Sunlight);

        // Moisture is limited by whichever of humidity/rainfall is worse
        let factors = FactorScores {
            temperature,
            moisture: humidity.min(rainfall),
            soil,
            light,
        };

        let weights = &self.config.weights;
        let overall = clamp_score(
            weights.temperature * f64::from(factors.temperature)
                + weights.moisture * f64::from(factors.moisture)
                + weights.soil * f64::from(factors.soil)
                + weights.light * f64::from(factors.light),
        );

        // A low moisture score advises on whichever of humidity/rainfall is off its ideal
        let threshold = self.config.challenge_threshold;
        let mut advisories: Vec<Advisory> = Vec::new();
        if factors.temperature < threshold {
            advisories.push(Advisory::for_factor(Factor::Temperature, reading, profile));
        }
        if factors.moisture < threshold {
            for factor in [Factor::Humidity, Factor::Rainfall] {
                if factor.value(reading) != factor.range(profile).ideal {
                    advisories.push(Advisory::for_factor(factor, reading, profile));
                }
            }
        }
        if factors.soil < threshold {
            advisories.push(Advisory::for_factor(Factor::SoilPh, reading, profile));
        }
        if factors.light < threshold {
            advisories.push(Advisory::for_factor(Factor::Sunlight, reading, profile));
        }

        let (recommendations, challenges) = compile_advice(&advisories);

        tracing::debug!(
            "{}: overall {} (temperature {}, moisture {}, soil {}, light {}), {} challenges",
            profile.name(), overall, factors.temperature, factors.moisture, factors.soil,
            factors.light, challenges.len()
        );

        SuitabilityScore {
            species: profile.name().to_string(),
            species_key: profile.species,
            score: overall,
            factors,
            recommendations,
            challenges,
        }
    }

    /// Score every species and sort best to worst
    ///
    /// Equal scores are ordered alphabetically by species name.
    pub fn rank_species(&self, reading: &EnvironmentalReading) -> Vec<SuitabilityScore> {
        let implausible = reading.implausible_fields();
        if !implausible.is_empty() {
            tracing::warn!("Reading has implausible values for: {}", implausible.join(", "));
        }

        let mut results: Vec<SuitabilityScore> = SPECIES_PROFILES
            .iter()
            .map(|profile| self.score_species(profile, reading))
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.species.cmp(&b.species)));

        results
    }
}

/// Score one species with the default configuration
pub fn score_species(profile: &SpeciesProfile, reading: &EnvironmentalReading) -> SuitabilityScore {
    SuitabilityScorer::default().score_species(profile, reading)
}

/// Rank all species with the default configuration
pub fn rank_species(reading: &EnvironmentalReading) -> Vec<SuitabilityScore> {
    SuitabilityScorer::default().rank_species(reading)
}
