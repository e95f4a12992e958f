//! Environmental Reading definition and sample readings
//!
//! Defines the EnvironmentalReading struct representing a grower's local
//! conditions, plus 3 named sample readings used by the CLI and tests.

use serde::{Deserialize, Serialize};

/// Local environmental conditions submitted for scoring.
///
/// Every field has a default, so a partially filled JSON document still
/// produces a complete reading. Keys are accepted in snake_case or in the
/// camelCase form used by the web form (`soilPH`, `sunlightHours`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalReading {
    /// Average temperature (°C)
    pub temperature: f64,

    /// Relative humidity (%)
    pub humidity: f64,

    /// Annual rainfall (mm/year)
    pub rainfall: f64,

    /// Soil pH
    #[serde(alias = "soilPH", alias = "soilPh")]
    pub soil_ph: f64,

    /// Direct sunlight (hours/day)
    #[serde(alias = "sunlightHours")]
    pub sunlight_hours: f64,

    /// Wind speed (km/h) - reported, not scored
    #[serde(alias = "windSpeed")]
    pub wind_speed: f64,

    /// Elevation (m) - reported, not scored
    pub elevation: f64,
}

impl Default for EnvironmentalReading {
    fn default() -> Self {
        Self {
            temperature: 15.0,
            humidity: 65.0,
            rainfall: 800.0,
            soil_ph: 6.5,
            sunlight_hours: 6.0,
            wind_speed: 10.0,
            elevation: 200.0,
        }
    }
}

impl EnvironmentalReading {
    /// Names of fields holding values no real location could produce
    /// (non-finite numbers, humidity outside 0-100, pH outside 0-14,
    /// negative rainfall or sunlight, more than 24 h of sun).
    ///
    /// Scoring still accepts such readings; this is for diagnostics only.
    pub fn implausible_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();

        let checks: [(&'static str, f64, f64, f64); 7] = [
            ("temperature", self.temperature, -90.0, 60.0),
            ("humidity", self.humidity, 0.0, 100.0),
            ("rainfall", self.rainfall, 0.0, f64::MAX),
            ("soil_ph", self.soil_ph, 0.0, 14.0),
            ("sunlight_hours", self.sunlight_hours, 0.0, 24.0),
            ("wind_speed", self.wind_speed, 0.0, f64::MAX),
            ("elevation", self.elevation, -500.0, 9000.0),
        ];

        for (name, value, lo, hi) in checks {
            if !value.is_finite() || value < lo || value > hi {
                fields.push(name);
            }
        }

        fields
    }
}

// ============================================================================
// Sample Readings
// ============================================================================

/// Cool northern wetland, matching Iris setosa's ideal conditions
pub fn arctic_wetland() -> EnvironmentalReading {
    EnvironmentalReading {
        temperature: 5.0,
        humidity: 75.0,
        rainfall: 800.0,
        soil_ph: 6.2,
        sunlight_hours: 6.0,
        wind_speed: 15.0,
        elevation: 500.0,
    }
}

/// Mild temperate marsh, matching Iris versicolor's ideal conditions
pub fn temperate_marsh() -> EnvironmentalReading {
    EnvironmentalReading {
        temperature: 15.0,
        humidity: 65.0,
        rainfall: 1000.0,
        soil_ph: 6.8,
        sunlight_hours: 7.0,
        wind_speed: 10.0,
        elevation: 300.0,
    }
}

/// Warm coastal swamp, matching Iris virginica's ideal conditions
pub fn southern_swamp() -> EnvironmentalReading {
    EnvironmentalReading {
        temperature: 20.0,
        humidity: 80.0,
        rainfall: 1200.0,
        soil_ph: 5.8,
        sunlight_hours: 8.0,
        wind_speed: 8.0,
        elevation: 100.0,
    }
}

/// All sample readings with their lookup names
pub fn sample_readings() -> Vec<(&'static str, EnvironmentalReading)> {
    vec![
        ("arctic_wetland", arctic_wetland()),
        ("temperate_marsh", temperate_marsh()),
        ("southern_swamp", southern_swamp()),
    ]
}

/// Look up a sample reading by name (case-insensitive, `-` or `_`)
pub fn sample_reading(name: &str) -> Option<EnvironmentalReading> {
    let wanted = name.trim().to_ascii_lowercase().replace('-', "_");
    sample_readings()
        .into_iter()
        .find(|(key, _)| *key == wanted)
        .map(|(_, reading)| reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_form_defaults() {
        let reading = EnvironmentalReading::default();
        assert_eq!(reading.temperature, 15.0);
        assert_eq!(reading.soil_ph, 6.5);
        assert_eq!(reading.elevation, 200.0);
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let reading: EnvironmentalReading =
            serde_json::from_str(r#"{"temperature": 22, "soilPH": 5.9, "sunlightHours": 9.5}"#).unwrap();
        assert_eq!(reading.temperature, 22.0);
        assert_eq!(reading.soil_ph, 5.9);
        assert_eq!(reading.sunlight_hours, 9.5);
        // Untouched fields fall back to defaults
        assert_eq!(reading.humidity, 65.0);
        assert_eq!(reading.wind_speed, 10.0);
    }

    #[test]
    fn test_sample_lookup() {
        assert_eq!(sample_reading("Arctic-Wetland"), Some(arctic_wetland()));
        assert_eq!(sample_reading("southern_swamp"), Some(southern_swamp()));
        assert_eq!(sample_reading("sahara"), None);
    }

    #[test]
    fn test_implausible_fields() {
        assert!(EnvironmentalReading::default().implausible_fields().is_empty());

        let reading = EnvironmentalReading {
            humidity: -10.0,
            soil_ph: f64::NAN,
            ..Default::default()
        };
        assert_eq!(reading.implausible_fields(), vec!["humidity", "soil_ph"]);
    }
}
