//! Multi-species flower classifier
//!
//! First matching rule wins; Iris setosa is the fallback when no rule fires.

use serde::{Deserialize, Serialize};

/// Gardening difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareLevel {
    Easy,
    Moderate,
    Difficult,
}

impl CareLevel {
    pub fn display_text(&self) -> &'static str {
        match self {
            CareLevel::Easy => "Easy",
            CareLevel::Moderate => "Moderate",
            CareLevel::Difficult => "Difficult",
        }
    }
}

/// Reference entry for a flower species
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowerRecord {
    pub species: &'static str,
    pub family: &'static str,
    pub characteristics: &'static [&'static str],
    pub habitat: &'static str,
    pub blooming_season: &'static str,
    pub care_level: CareLevel,
    pub colors: &'static [&'static str],
}

pub static FLOWER_DATABASE: [FlowerRecord; 6] = [
    FlowerRecord {
        species: "Rosa gallica",
        family: "Rosaceae",
        characteristics: &["Fragrant petals", "Thorny stems", "Compound leaves", "Hip fruits"],
        habitat: "Temperate gardens, well-drained soil",
        blooming_season: "Late spring to early fall",
        care_level: CareLevel::Moderate,
        colors: &["Red", "Pink", "White", "Yellow"],
    },
    FlowerRecord {
        species: "Tulipa gesneriana",
        family: "Liliaceae",
        characteristics: &["Cup-shaped flowers", "Single stem", "Bulbous root", "Smooth leaves"],
        habitat: "Cool temperate regions, well-drained soil",
        blooming_season: "Early to mid spring",
        care_level: CareLevel::Easy,
        colors: &["Red", "Yellow", "Pink", "Purple", "White"],
    },
    FlowerRecord {
        species: "Bellis perennis",
        family: "Asteraceae",
        characteristics: &["Composite flower head", "White petals", "Yellow center", "Rosette leaves"],
        habitat: "Grasslands, lawns, meadows",
        blooming_season: "Spring to fall",
        care_level: CareLevel::Easy,
        colors: &["White", "Pink"],
    },
    FlowerRecord {
        species: "Helianthus annuus",
        family: "Asteraceae",
        characteristics: &["Large flower head", "Yellow petals", "Dark center", "Tall stem"],
        habitat: "Full sun, well-drained soil",
        blooming_season: "Mid to late summer",
        care_level: CareLevel::Easy,
        colors: &["Yellow", "Orange", "Red"],
    },
    FlowerRecord {
        species: "Narcissus pseudonarcissus",
        family: "Amaryllidaceae",
        characteristics: &["Trumpet corona", "Six petals", "Bulbous root", "Linear leaves"],
        habitat: "Woodland edges, meadows",
        blooming_season: "Early spring",
        care_level: CareLevel::Easy,
        colors: &["Yellow", "White"],
    },
    FlowerRecord {
        species: "Iris setosa",
        family: "Iridaceae",
        characteristics: &["Smallest petals", "Bristle-pointed", "Sword-like leaves", "Rhizome root"],
        habitat: "Arctic wetlands, cool climates",
        blooming_season: "Late spring to early summer",
        care_level: CareLevel::Moderate,
        colors: &["Blue", "Purple"],
    },
];

/// Look up a flower by binomial name (case-insensitive)
pub fn flower_record(species: &str) -> Option<&'static FlowerRecord> {
    let wanted = species.trim();
    FLOWER_DATABASE.iter().find(|r| r.species.eq_ignore_ascii_case(wanted))
}

/// Flower measurements (cm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowerMeasurements {
    pub petal_length: f64,
    pub petal_width: f64,
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub stem_height: f64,
    pub flower_diameter: f64,
}

impl Default for FlowerMeasurements {
    fn default() -> Self {
        Self {
            petal_length: 3.0,
            petal_width: 1.5,
            sepal_length: 4.0,
            sepal_width: 2.0,
            stem_height: 25.0,
            flower_diameter: 5.0,
        }
    }
}

/// Classification result joined with the reference entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowerClassification {
    pub record: &'static FlowerRecord,
    pub confidence: f64,
}

const FALLBACK: (&str, f64) = ("Iris setosa", 0.85);

fn match_rule(m: &FlowerMeasurements) -> (&'static str, f64) {
    if m.flower_diameter > 10.0 && m.stem_height > 50.0 {
        ("Helianthus annuus", 0.92)
    } else if m.petal_length > 4.0 && m.petal_width > 2.0 {
        ("Rosa gallica", 0.88)
    } else if m.petal_length < 2.0 && m.flower_diameter < 3.0 {
        ("Bellis perennis", 0.91)
    } else if m.stem_height < 15.0 && m.petal_length > 2.0 {
        ("Tulipa gesneriana", 0.87)
    } else if m.petal_length > 3.0 && m.petal_width < 2.0 {
        ("Narcissus pseudonarcissus", 0.89)
    } else {
        FALLBACK
    }
}

/// Classify a flower by its measurements
pub fn classify_flower(measurements: &FlowerMeasurements) -> FlowerClassification {
    let (species, confidence) = match_rule(measurements);

    // Every rule names a table entry; the last entry is the fallback species
    let record = flower_record(species).unwrap_or(&FLOWER_DATABASE[FLOWER_DATABASE.len() - 1]);

    FlowerClassification { record, confidence }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let sunflower = FlowerMeasurements { flower_diameter: 20.0, stem_height: 150.0, ..Default::default() };
        assert_eq!(classify_flower(&sunflower).record.species, "Helianthus annuus");

        // Also matches the rose rule, but sunflower is checked first
        let big_rose_like = FlowerMeasurements { petal_length: 5.0, petal_width: 3.0, ..sunflower };
        assert_eq!(classify_flower(&big_rose_like).record.species, "Helianthus annuus");

        let rose = FlowerMeasurements { petal_length: 5.0, petal_width: 3.0, ..Default::default() };
        assert_eq!(classify_flower(&rose).record.species, "Rosa gallica");
    }

    #[test]
    fn test_each_rule() {
        let daisy = FlowerMeasurements { petal_length: 1.0, flower_diameter: 2.0, ..Default::default() };
        let tulip = FlowerMeasurements { stem_height: 10.0, petal_length: 2.5, ..Default::default() };
        let daffodil = FlowerMeasurements { petal_length: 3.5, petal_width: 1.0, ..Default::default() };

        let daisy = classify_flower(&daisy);
        assert_eq!(daisy.record.family, "Asteraceae");
        assert_eq!(daisy.confidence, 0.91);
        assert_eq!(classify_flower(&tulip).record.species, "Tulipa gesneriana");
        assert_eq!(classify_flower(&daffodil).record.species, "Narcissus pseudonarcissus");
    }

    #[test]
    fn test_fallback_is_iris() {
        let result = classify_flower(&FlowerMeasurements::default());
        assert_eq!(result.record.species, "Iris setosa");
        assert_eq!(result.confidence, 0.85);
        assert_eq!(result.record.care_level, CareLevel::Moderate);
    }

    #[test]
    fn test_every_rule_species_is_in_table() {
        for name in ["Helianthus annuus", "Rosa gallica", "Bellis perennis", "Tulipa gesneriana",
                     "Narcissus pseudonarcissus", FALLBACK.0] {
            assert!(flower_record(name).is_some(), "{} missing", name);
        }
    }
}
