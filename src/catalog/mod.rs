//! Static reference data for the iris species
//!
//! - `species.rs` - Identity, habitat and growing conditions
//! - `medicinal.rs` - Traditional medicinal uses with keyword search

pub mod species;
pub mod medicinal;

pub use species::{GrowingConditions, SpeciesInfo, species_info};
pub use medicinal::{
    Effectiveness, Evidence, MedicinalRecord, MedicinalUse, MEDICAL_DISCLAIMER, medicinal_record,
    search_medicinal,
};
