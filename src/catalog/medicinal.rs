//! Medicinal uses database
//!
//! Traditional and researched uses for each iris species. Search matches the
//! species name, use conditions and active compounds, case-insensitively.

use serde::Serialize;

use crate::suitability::IrisSpecies;

pub const MEDICAL_DISCLAIMER: &str = "This information is for educational purposes only. \
Always consult qualified healthcare professionals before using any plant medicinally. \
Some iris species can be toxic if used improperly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effectiveness {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Evidence {
    Traditional,
    Clinical,
    Research,
}

/// One documented use
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MedicinalUse {
    pub condition: &'static str,
    pub preparation: &'static str,
    pub dosage: &'static str,
    pub effectiveness: Effectiveness,
    pub evidence: Evidence,
    pub precautions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MedicinalRecord {
    pub species: IrisSpecies,
    pub species_name: &'static str,
    pub active_compounds: &'static [&'static str],
    pub primary_uses: &'static [MedicinalUse],
    pub contraindications: &'static [&'static str],
    pub side_effects: &'static [&'static str],
    pub preparation_methods: &'static [&'static str],
    pub historical_context: &'static str,
}

impl MedicinalRecord {
    /// True if the species name, a use condition or an active compound
    /// contains `needle` (already lowercased)
    fn matches(&self, needle: &str) -> bool {
        self.species_name.to_lowercase().contains(needle)
            || self.primary_uses.iter().any(|u| u.condition.to_lowercase().contains(needle))
            || self.active_compounds.iter().any(|c| c.to_lowercase().contains(needle))
    }
}

static MEDICINAL_DATABASE: [MedicinalRecord; 3] = [
    MedicinalRecord {
        species: IrisSpecies::Setosa,
        species_name: "Iris setosa",
        active_compounds: &["Iridin", "Isoflavones", "Tannins", "Mucilage"],
        primary_uses: &[
            MedicinalUse {
                condition: "Wound Healing",
                preparation: "Poultice from fresh rhizome",
                dosage: "Apply topically 2-3 times daily",
                effectiveness: Effectiveness::High,
                evidence: Evidence::Traditional,
                precautions: &["Clean wound thoroughly", "Monitor for allergic reactions"],
            },
            MedicinalUse {
                condition: "Skin Inflammation",
                preparation: "Decoction of dried root",
                dosage: "Wash affected area twice daily",
                effectiveness: Effectiveness::Moderate,
                evidence: Evidence::Traditional,
                precautions: &["Patch test before use", "Avoid open wounds"],
            },
            MedicinalUse {
                condition: "Joint Pain",
                preparation: "Tincture (1:5 ratio)",
                dosage: "5-10 drops, 3 times daily",
                effectiveness: Effectiveness::Moderate,
                evidence: Evidence::Traditional,
                precautions: &["Not for internal use in pregnancy", "Consult healthcare provider"],
            },
        ],
        contraindications: &["Pregnancy", "Breastfeeding", "Kidney disorders"],
        side_effects: &["Skin irritation", "Digestive upset if taken internally", "Allergic reactions"],
        preparation_methods: &["Fresh poultice", "Dried root decoction", "Alcohol tincture", "Oil infusion"],
        historical_context: "Used by Arctic indigenous peoples for centuries as a primary wound \
treatment and anti-inflammatory remedy.",
    },
    MedicinalRecord {
        species: IrisSpecies::Versicolor,
        species_name: "Iris versicolor",
        active_compounds: &["Irisin", "Resin", "Volatile oils", "Starch"],
        primary_uses: &[
            MedicinalUse {
                condition: "Digestive Issues",
                preparation: "Root powder in capsules",
                dosage: "250mg, twice daily with meals",
                effectiveness: Effectiveness::Moderate,
                evidence: Evidence::Traditional,
                precautions: &["Start with lower dose", "Take with food", "Monitor for nausea"],
            },
            MedicinalUse {
                condition: "Liver Support",
                preparation: "Standardized extract",
                dosage: "100mg daily",
                effectiveness: Effectiveness::Low,
                evidence: Evidence::Research,
                precautions: &["Regular liver function monitoring", "Avoid with liver disease"],
            },
            MedicinalUse {
                condition: "Skin Conditions",
                preparation: "External wash from decoction",
                dosage: "Apply to affected area once daily",
                effectiveness: Effectiveness::Moderate,
                evidence: Evidence::Traditional,
                precautions: &["Dilute properly", "Discontinue if irritation occurs"],
            },
        ],
        contraindications: &["Liver disease", "Gallbladder disorders", "Children under 12"],
        side_effects: &["Nausea", "Vomiting", "Diarrhea", "Liver toxicity (rare)"],
        preparation_methods: &["Root powder", "Standardized extract", "Decoction", "Homeopathic dilution"],
        historical_context: "Widely used in 19th-century American medicine as a cathartic and liver \
remedy, though modern use is limited due to toxicity concerns.",
    },
    MedicinalRecord {
        species: IrisSpecies::Virginica,
        species_name: "Iris virginica",
        active_compounds: &["Iridin glycoside", "Flavonoids", "Saponins", "Essential oils"],
        primary_uses: &[
            MedicinalUse {
                condition: "Rheumatism",
                preparation: "Root tincture",
                dosage: "10-15 drops, 2-3 times daily",
                effectiveness: Effectiveness::Moderate,
                evidence: Evidence::Traditional,
                precautions: &["Not for long-term use", "Monitor for side effects"],
            },
            MedicinalUse {
                condition: "Antiseptic Treatment",
                preparation: "Fresh root poultice",
                dosage: "Apply to cleaned wound, change daily",
                effectiveness: Effectiveness::High,
                evidence: Evidence::Traditional,
                precautions: &["Use only on external wounds", "Keep wound clean"],
            },
            MedicinalUse {
                condition: "Inflammation",
                preparation: "Standardized root extract",
                dosage: "50-100mg daily",
                effectiveness: Effectiveness::Moderate,
                evidence: Evidence::Research,
                precautions: &["Consult healthcare provider", "Monitor for allergic reactions"],
            },
        ],
        contraindications: &["Pregnancy", "Nursing mothers", "Autoimmune conditions"],
        side_effects: &["Skin sensitivity", "Gastrointestinal upset", "Allergic dermatitis"],
        preparation_methods: &["Fresh root poultice", "Alcohol tincture", "Standardized extract", "Dried root tea"],
        historical_context: "Traditional medicine of southeastern United States, particularly valued \
by Native American tribes for its antiseptic and anti-inflammatory properties.",
    },
];

pub fn medicinal_record(species: IrisSpecies) -> &'static MedicinalRecord {
    match species {
        IrisSpecies::Setosa => &MEDICINAL_DATABASE[0],
        IrisSpecies::Versicolor => &MEDICINAL_DATABASE[1],
        IrisSpecies::Virginica => &MEDICINAL_DATABASE[2],
    }
}

/// Records matching a search term, in table order
///
/// A blank term returns every record.
pub fn search_medicinal(term: &str) -> Vec<&'static MedicinalRecord> {
    let needle = term.trim().to_lowercase();
    MEDICINAL_DATABASE
        .iter()
        .filter(|record| needle.is_empty() || record.matches(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species_of(records: &[&MedicinalRecord]) -> Vec<IrisSpecies> {
        records.iter().map(|r| r.species).collect()
    }

    #[test]
    fn test_blank_term_returns_all() {
        assert_eq!(search_medicinal("").len(), 3);
        assert_eq!(search_medicinal("   ").len(), 3);
    }

    #[test]
    fn test_search_by_condition() {
        assert_eq!(species_of(&search_medicinal("skin")), vec![IrisSpecies::Setosa, IrisSpecies::Versicolor]);
        assert_eq!(species_of(&search_medicinal("RHEUMATISM")), vec![IrisSpecies::Virginica]);
    }

    #[test]
    fn test_search_by_compound_and_name() {
        // "Iridin" and "Iridin glycoside"
        assert_eq!(species_of(&search_medicinal("iridin")), vec![IrisSpecies::Setosa, IrisSpecies::Virginica]);
        assert_eq!(species_of(&search_medicinal("versicolor")), vec![IrisSpecies::Versicolor]);
        // Every species name contains "iris"
        assert_eq!(search_medicinal("iris").len(), 3);
    }

    #[test]
    fn test_search_no_match() {
        assert!(search_medicinal("caffeine").is_empty());
    }

    #[test]
    fn test_record_lookup() {
        let record = medicinal_record(IrisSpecies::Versicolor);
        assert_eq!(record.primary_uses.len(), 3);
        assert_eq!(record.primary_uses[1].evidence, Evidence::Research);
    }
}
