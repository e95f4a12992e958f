//! Iris measurement classifier
//!
//! Petal length separates setosa outright; versicolor and virginica are then
//! split on petal length and width together.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::suitability::IrisSpecies;

/// Flower measurements in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrisMeasurements {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

/// Rejected measurement input
#[derive(Debug, Error, PartialEq)]
pub enum MeasurementError {
    #[error("missing measurement: {0}")]
    Missing(&'static str),

    #[error("{field} is not a number: '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be a positive finite length, got {value}")]
    OutOfDomain { field: &'static str, value: f64 },
}

impl IrisMeasurements {
    pub const FIELDS: [&'static str; 4] = ["sepal_length", "sepal_width", "petal_length", "petal_width"];

    /// Parse raw form input, in [`Self::FIELDS`] order
    pub fn parse(raw: [&str; 4]) -> Result<Self, MeasurementError> {
        let mut values = [0.0; 4];
        for ((slot, field), text) in values.iter_mut().zip(Self::FIELDS).zip(raw) {
            *slot = parse_length(field, text)?;
        }
        let [sepal_length, sepal_width, petal_length, petal_width] = values;

        Ok(Self { sepal_length, sepal_width, petal_length, petal_width })
    }

    /// Check already-numeric measurements
    pub fn validate(&self) -> Result<(), MeasurementError> {
        let values = [self.sepal_length, self.sepal_width, self.petal_length, self.petal_width];
        for (field, value) in Self::FIELDS.into_iter().zip(values) {
            check_length(field, value)?;
        }
        Ok(())
    }
}

fn parse_length(field: &'static str, text: &str) -> Result<f64, MeasurementError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MeasurementError::Missing(field));
    }
    let value: f64 = trimmed.parse().map_err(|_| MeasurementError::NotANumber {
        field,
        value: trimmed.to_string(),
    })?;
    check_length(field, value)?;
    Ok(value)
}

fn check_length(field: &'static str, value: f64) -> Result<(), MeasurementError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeasurementError::OutOfDomain { field, value })
    }
}

/// Predicted species with the rule's fixed confidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrisPrediction {
    pub species: IrisSpecies,
    pub confidence: f64,
    pub measurements: IrisMeasurements,
}

/// Classify an iris from its measurements
pub fn classify_iris(measurements: &IrisMeasurements) -> Result<IrisPrediction, MeasurementError> {
    measurements.validate()?;

    let (species, confidence) = if measurements.petal_length < 2.5 {
        (IrisSpecies::Setosa, 0.95)
    } else if measurements.petal_length < 5.0 && measurements.petal_width < 1.8 {
        (IrisSpecies::Versicolor, 0.87)
    } else {
        (IrisSpecies::Virginica, 0.92)
    };

    tracing::debug!(
        "Classified petal {}x{} cm as {} ({:.2})",
        measurements.petal_length, measurements.petal_width, species.key(), confidence
    );

    Ok(IrisPrediction { species, confidence, measurements: *measurements })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(petal_length: f64, petal_width: f64) -> IrisMeasurements {
        IrisMeasurements { sepal_length: 5.8, sepal_width: 3.0, petal_length, petal_width }
    }

    #[test]
    fn test_setosa_by_short_petal() {
        let prediction = classify_iris(&measure(1.4, 0.2)).unwrap();
        assert_eq!(prediction.species, IrisSpecies::Setosa);
        assert_eq!(prediction.confidence, 0.95);
    }

    #[test]
    fn test_versicolor_and_virginica_split() {
        assert_eq!(classify_iris(&measure(4.5, 1.5)).unwrap().species, IrisSpecies::Versicolor);
        // Long petal
        assert_eq!(classify_iris(&measure(5.1, 1.5)).unwrap().species, IrisSpecies::Virginica);
        // Wide petal
        assert_eq!(classify_iris(&measure(4.8, 1.8)).unwrap().species, IrisSpecies::Virginica);
    }

    #[test]
    fn test_boundary_is_exclusive() {
        assert_eq!(classify_iris(&measure(2.5, 0.4)).unwrap().species, IrisSpecies::Versicolor);
    }

    #[test]
    fn test_parse_form_input() {
        let parsed = IrisMeasurements::parse(["5.1", " 3.5 ", "1.4", "0.2"]).unwrap();
        assert_eq!(parsed, IrisMeasurements { sepal_length: 5.1, sepal_width: 3.5, petal_length: 1.4, petal_width: 0.2 });
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            IrisMeasurements::parse(["5.1", "", "1.4", "0.2"]),
            Err(MeasurementError::Missing("sepal_width"))
        );
        assert_eq!(
            IrisMeasurements::parse(["5.1", "3.5", "long", "0.2"]),
            Err(MeasurementError::NotANumber { field: "petal_length", value: "long".to_string() })
        );
        assert_eq!(
            IrisMeasurements::parse(["5.1", "3.5", "1.4", "-0.2"]),
            Err(MeasurementError::OutOfDomain { field: "petal_width", value: -0.2 })
        );
    }

    #[test]
    fn test_classify_rejects_nan() {
        let err = classify_iris(&measure(f64::NAN, 1.0)).unwrap_err();
        assert!(matches!(err, MeasurementError::OutOfDomain { field: "petal_length", .. }));
    }
}
