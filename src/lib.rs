//! Iris Suitability
//!
//! Rule-based environmental suitability scoring for three iris species.
//!
//! - `suitability/`: Reading, species profiles, factor scoring and ranking
//! - `config`: Factor weights and advice threshold (JSON-loadable)
//! - `classifier/`: Threshold classifiers over flower measurements
//! - `catalog/`: Species guide and medicinal uses database
//! - `formatters/`: Markdown, JSON and HTML ranking reports
//!
//! Everything is a pure function over static tables: no I/O besides optional
//! config loading, no shared state.

pub mod suitability;
pub mod config;
pub mod classifier;
pub mod catalog;
pub mod formatters;

// Re-export commonly used types
pub use suitability::{
    EnvironmentalReading, IrisSpecies, OptimalRange, SpeciesProfile, SuitabilityScore,
    SuitabilityScorer, SPECIES_PROFILES, rank_species, score_factor, score_species,
};
pub use config::ScoringConfig;
pub use formatters::SuitabilityReport;
