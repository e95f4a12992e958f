//! Rank iris species for an environmental reading
//!
//! Usage:
//!   cargo run --bin rank_suitability -- --preset temperate_marsh
//!   cargo run --bin rank_suitability -- --reading site.json --humidity 55 --format json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use iris_suitability::formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
use iris_suitability::suitability::sample_reading;
use iris_suitability::{EnvironmentalReading, ScoringConfig, SuitabilityReport, SuitabilityScorer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
    Html,
}

/// Rank iris species by how well a location suits them.
///
/// Field flags override values from `--reading` or `--preset`.
#[derive(Parser, Debug)]
#[command(name = "rank_suitability", about = "Iris environmental suitability ranking")]
struct CliArgs {
    /// JSON file holding an environmental reading
    #[arg(long, conflicts_with = "preset")]
    reading: Option<PathBuf>,

    /// Named sample reading (arctic_wetland, temperate_marsh, southern_swamp)
    #[arg(long)]
    preset: Option<String>,

    /// Temperature (°C)
    #[arg(long, allow_negative_numbers = true)]
    temperature: Option<f64>,

    /// Humidity (%)
    #[arg(long, allow_negative_numbers = true)]
    humidity: Option<f64>,

    /// Annual rainfall (mm)
    #[arg(long, allow_negative_numbers = true)]
    rainfall: Option<f64>,

    /// Soil pH
    #[arg(long, allow_negative_numbers = true)]
    soil_ph: Option<f64>,

    /// Sunlight (hours/day)
    #[arg(long, allow_negative_numbers = true)]
    sunlight_hours: Option<f64>,

    /// Wind speed (km/h)
    #[arg(long, allow_negative_numbers = true)]
    wind_speed: Option<f64>,

    /// Elevation (m)
    #[arg(long, allow_negative_numbers = true)]
    elevation: Option<f64>,

    /// Scoring config JSON (defaults to $IRIS_SCORER_CONFIG, then built-in weights)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,
}

impl CliArgs {
    fn base_reading(&self) -> Result<EnvironmentalReading> {
        if let Some(path) = &self.reading {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read reading file: {:?}", path))?;
            return serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse reading JSON: {:?}", path));
        }

        if let Some(name) = &self.preset {
            return sample_reading(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown preset '{}'", name));
        }

        Ok(EnvironmentalReading::default())
    }

    fn reading(&self) -> Result<EnvironmentalReading> {
        let mut reading = self.base_reading()?;

        let overrides = [
            (self.temperature, &mut reading.temperature),
            (self.humidity, &mut reading.humidity),
            (self.rainfall, &mut reading.rainfall),
            (self.soil_ph, &mut reading.soil_ph),
            (self.sunlight_hours, &mut reading.sunlight_hours),
            (self.wind_speed, &mut reading.wind_speed),
            (self.elevation, &mut reading.elevation),
        ];
        for (value, field) in overrides {
            if let Some(v) = value {
                *field = v;
            }
        }

        Ok(reading)
    }

    fn scoring_config(&self) -> Result<ScoringConfig> {
        match &self.config {
            Some(path) => ScoringConfig::load(path),
            None => ScoringConfig::from_env(),
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iris_suitability=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let reading = args.reading()?;
    let config = args.scoring_config()?;
    tracing::debug!("Reading: {:?}", reading);

    let scorer = SuitabilityScorer::new(config);
    let report = SuitabilityReport::new(reading, scorer.rank_species(&reading));

    if let Some(best) = report.best() {
        tracing::info!("Best match: {} ({}%)", best.species, best.score);
    }

    let output = match args.format {
        OutputFormat::Markdown => MarkdownFormatter::format(&report),
        OutputFormat::Json => JsonFormatter::format(&report)?,
        OutputFormat::Html => HtmlFormatter::format(&report),
    };
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_preset() {
        let args = CliArgs::parse_from([
            "rank_suitability", "--preset", "arctic_wetland", "--humidity", "40", "--temperature", "-3",
        ]);
        let reading = args.reading().unwrap();

        assert_eq!(reading.humidity, 40.0);
        assert_eq!(reading.temperature, -3.0);
        assert_eq!(reading.soil_ph, 6.2);
    }

    #[test]
    fn test_negative_values_accepted_for_every_field() {
        let args = CliArgs::parse_from([
            "rank_suitability",
            "--humidity", "-10",
            "--rainfall", "-5",
            "--soil-ph", "-1",
            "--sunlight-hours", "-2",
            "--wind-speed", "-3",
            "--elevation", "-50",
        ]);
        let reading = args.reading().unwrap();

        assert_eq!(reading.humidity, -10.0);
        assert_eq!(reading.rainfall, -5.0);
        assert_eq!(reading.soil_ph, -1.0);
        assert_eq!(reading.sunlight_hours, -2.0);
        assert_eq!(reading.wind_speed, -3.0);
        assert_eq!(reading.elevation, -50.0);
    }

    #[test]
    fn test_unknown_preset() {
        let args = CliArgs::parse_from(["rank_suitability", "--preset", "moon"]);
        assert!(args.reading().is_err());
    }

    #[test]
    fn test_reading_and_preset_conflict() {
        let result = CliArgs::try_parse_from([
            "rank_suitability", "--reading", "x.json", "--preset", "arctic_wetland",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_flag() {
        let args = CliArgs::parse_from(["rank_suitability", "--format", "json"]);
        assert_eq!(args.format, OutputFormat::Json);
    }
}
