//! Species guide entries

use serde::Serialize;

use crate::suitability::IrisSpecies;

/// Plain-language growing conditions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowingConditions {
    pub soil: &'static str,
    pub sunlight: &'static str,
    pub temperature: &'static str,
    pub water: &'static str,
}

/// Species guide entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeciesInfo {
    pub species: IrisSpecies,
    pub scientific_name: &'static str,
    pub common_names: &'static [&'static str],
    pub characteristics: &'static [&'static str],
    pub habitat: &'static str,
    pub medicinal_uses: &'static [&'static str],
    pub growing_conditions: GrowingConditions,
}

static SPECIES_GUIDE: [SpeciesInfo; 3] = [
    SpeciesInfo {
        species: IrisSpecies::Setosa,
        scientific_name: "Iris setosa",
        common_names: &["Bristle-pointed Iris", "Blue Flag"],
        characteristics: &[
            "Smallest petals among the three species",
            "Most distinct and easily separable",
            "Typically found in cooler climates",
        ],
        habitat: "Arctic and subarctic regions, wetlands",
        medicinal_uses: &[
            "Traditional use for treating wounds",
            "Anti-inflammatory properties",
            "Used in folk medicine for skin conditions",
        ],
        growing_conditions: GrowingConditions {
            soil: "Moist, well-drained soil",
            sunlight: "Full sun to partial shade",
            temperature: "Cold hardy, prefers cooler temperatures",
            water: "Regular watering, tolerates wet conditions",
        },
    },
    SpeciesInfo {
        species: IrisSpecies::Versicolor,
        scientific_name: "Iris versicolor",
        common_names: &["Blue Flag Iris", "Harlequin Blueflag"],
        characteristics: &[
            "Medium-sized petals and sepals",
            "Purple-blue flowers with yellow markings",
            "Most common in temperate regions",
        ],
        habitat: "Wetlands, marshes, pond edges",
        medicinal_uses: &[
            "Historically used as a cathartic",
            "Traditional treatment for digestive issues",
            "Used in homeopathic preparations",
        ],
        growing_conditions: GrowingConditions {
            soil: "Wet to moist soil, tolerates clay",
            sunlight: "Full sun to partial shade",
            temperature: "Moderate temperatures, frost tolerant",
            water: "Prefers consistently moist to wet conditions",
        },
    },
    SpeciesInfo {
        species: IrisSpecies::Virginica,
        scientific_name: "Iris virginica",
        common_names: &["Virginia Iris", "Southern Blue Flag"],
        characteristics: &[
            "Largest petals and sepals",
            "Tall growing with blue to purple flowers",
            "Most variable in measurements",
        ],
        habitat: "Wetlands, swamps, coastal areas",
        medicinal_uses: &[
            "Root used in traditional medicine",
            "Anti-inflammatory and antiseptic properties",
            "Historical use for treating rheumatism",
        ],
        growing_conditions: GrowingConditions {
            soil: "Moist to wet, acidic soil",
            sunlight: "Full sun to partial shade",
            temperature: "Warm temperate climates",
            water: "High water requirements, bog conditions",
        },
    },
];

pub fn species_info(species: IrisSpecies) -> &'static SpeciesInfo {
    match species {
        IrisSpecies::Setosa => &SPECIES_GUIDE[0],
        IrisSpecies::Versicolor => &SPECIES_GUIDE[1],
        IrisSpecies::Virginica => &SPECIES_GUIDE[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_matches_species() {
        for species in IrisSpecies::ALL {
            let info = species_info(species);
            assert_eq!(info.species, species);
            assert_eq!(info.scientific_name, species.scientific_name());
            assert!(!info.common_names.is_empty());
        }
    }
}
