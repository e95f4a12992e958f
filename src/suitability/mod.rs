//! Environmental Suitability Engine
//!
//! Compares a caller-supplied environmental reading against each iris
//! species' optimal ranges (min/ideal/max) and ranks the species by how
//! well the location suits them.
//!
//! ## Architecture
//! - `reading.rs` - EnvironmentalReading struct + named sample readings
//! - `profiles.rs` - Fixed per-species optimal range table
//! - `comparator.rs` - Single-factor range scoring (0-100)
//! - `assessment.rs` - SuitabilityScore output structs and score bands
//! - `advice.rs` - Directional recommendations and challenges
//! - `scorer.rs` - Combines factors, ranks species

pub mod reading;
pub mod profiles;
pub mod comparator;
pub mod assessment;
pub mod advice;
pub mod scorer;

// Re-export public API
pub use reading::{EnvironmentalReading, sample_reading, sample_readings};
pub use profiles::{IrisSpecies, OptimalRange, SpeciesProfile, SPECIES_PROFILES, profile};
pub use comparator::{RangeFit, compare_to_range, score_factor};
pub use assessment::{FactorScores, ScoreBand, SuitabilityScore};
pub use advice::{Advisory, Direction, Factor, FAVORABLE_RECOMMENDATION};
pub use scorer::{SuitabilityScorer, rank_species, score_species};
