//! Species Profiles
//!
//! Fixed optimal growing ranges for the three iris species. The table is
//! closed: it is built at compile time and never changes at runtime.

use serde::{Deserialize, Serialize};

/// The iris species known to the engine, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrisSpecies {
    Setosa,
    Versicolor,
    Virginica,
}

impl IrisSpecies {
    pub const ALL: [IrisSpecies; 3] = [
        IrisSpecies::Setosa,
        IrisSpecies::Versicolor,
        IrisSpecies::Virginica,
    ];

    /// Short lowercase key ("setosa")
    pub fn key(&self) -> &'static str {
        match self {
            IrisSpecies::Setosa => "setosa",
            IrisSpecies::Versicolor => "versicolor",
            IrisSpecies::Virginica => "virginica",
        }
    }

    /// Display name used in reports ("Iris Setosa")
    pub fn display_name(&self) -> &'static str {
        match self {
            IrisSpecies::Setosa => "Iris Setosa",
            IrisSpecies::Versicolor => "Iris Versicolor",
            IrisSpecies::Virginica => "Iris Virginica",
        }
    }

    /// Binomial name ("Iris setosa")
    pub fn scientific_name(&self) -> &'static str {
        match self {
            IrisSpecies::Setosa => "Iris setosa",
            IrisSpecies::Versicolor => "Iris versicolor",
            IrisSpecies::Virginica => "Iris virginica",
        }
    }

    /// Parse from key, display name or binomial (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let key = lower.strip_prefix("iris ").unwrap_or(&lower).trim();
        IrisSpecies::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Acceptable range for one environmental factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalRange {
    pub min: f64,
    pub max: f64,
    pub ideal: f64,
}

impl OptimalRange {
    pub const fn new(min: f64, max: f64, ideal: f64) -> Self {
        Self { min, max, ideal }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Largest distance from ideal to either bound (0 for a zero-width range)
    pub fn half_width(&self) -> f64 {
        (self.ideal - self.min).max(self.max - self.ideal)
    }
}

/// Optimal growing conditions for one species
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeciesProfile {
    pub species: IrisSpecies,
    pub temperature: OptimalRange,
    pub humidity: OptimalRange,
    pub rainfall: OptimalRange,
    pub soil_ph: OptimalRange,
    pub sunlight: OptimalRange,
    pub elevation: OptimalRange,
}

impl SpeciesProfile {
    pub fn name(&self) -> &'static str {
        self.species.display_name()
    }
}

/// Profile table, in the order species are presented
pub static SPECIES_PROFILES: [SpeciesProfile; 3] = [
    SpeciesProfile {
        species: IrisSpecies::Setosa,
        temperature: OptimalRange::new(-5.0, 15.0, 5.0),
        humidity: OptimalRange::new(60.0, 90.0, 75.0),
        rainfall: OptimalRange::new(400.0, 1200.0, 800.0),
        soil_ph: OptimalRange::new(5.5, 7.0, 6.2),
        sunlight: OptimalRange::new(4.0, 8.0, 6.0),
        elevation: OptimalRange::new(0.0, 2000.0, 500.0),
    },
    SpeciesProfile {
        species: IrisSpecies::Versicolor,
        temperature: OptimalRange::new(5.0, 25.0, 15.0),
        humidity: OptimalRange::new(50.0, 80.0, 65.0),
        rainfall: OptimalRange::new(600.0, 1400.0, 1000.0),
        soil_ph: OptimalRange::new(6.0, 7.5, 6.8),
        sunlight: OptimalRange::new(5.0, 9.0, 7.0),
        elevation: OptimalRange::new(0.0, 1500.0, 300.0),
    },
    SpeciesProfile {
        species: IrisSpecies::Virginica,
        temperature: OptimalRange::new(10.0, 30.0, 20.0),
        humidity: OptimalRange::new(60.0, 95.0, 80.0),
        rainfall: OptimalRange::new(800.0, 2000.0, 1200.0),
        soil_ph: OptimalRange::new(5.0, 6.5, 5.8),
        sunlight: OptimalRange::new(6.0, 10.0, 8.0),
        elevation: OptimalRange::new(0.0, 500.0, 100.0),
    },
];

/// Profile for a species
pub fn profile(species: IrisSpecies) -> &'static SpeciesProfile {
    match species {
        IrisSpecies::Setosa => &SPECIES_PROFILES[0],
        IrisSpecies::Versicolor => &SPECIES_PROFILES[1],
        IrisSpecies::Virginica => &SPECIES_PROFILES[2],
    }
}
