//! Rule-based measurement classifiers
//!
//! - `iris.rs` - petal threshold rules for the three iris species
//! - `flowers.rs` - coarse rules over six garden flowers with a reference table
//!
//! Both are fixed decision lists with canned confidences, not trained models.

pub mod iris;
pub mod flowers;

pub use iris::{IrisMeasurements, IrisPrediction, MeasurementError, classify_iris};
pub use flowers::{
    CareLevel, FlowerClassification, FlowerMeasurements, FlowerRecord, FLOWER_DATABASE,
    classify_flower, flower_record,
};
