use super::SuitabilityReport;
use crate::suitability::SuitabilityScore;

/// Markdown formatter for suitability reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a ranking report as markdown
    pub fn format(report: &SuitabilityReport) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str("# Environmental Suitability Analysis\n\n");

        // Reading
        let r = &report.reading;
        md.push_str("## Environmental Parameters\n\n");
        md.push_str("| Parameter | Value |\n");
        md.push_str("|-----------|-------|\n");
        md.push_str(&format!("| Temperature | {}°C |\n", r.temperature));
        md.push_str(&format!("| Humidity | {}% |\n", r.humidity));
        md.push_str(&format!("| Annual Rainfall | {} mm |\n", r.rainfall));
        md.push_str(&format!("| Soil pH | {} |\n", r.soil_ph));
        md.push_str(&format!("| Daily Sunlight | {} hours |\n", r.sunlight_hours));
        md.push_str(&format!("| Wind Speed | {} km/h |\n", r.wind_speed));
        md.push_str(&format!("| Elevation | {} m |\n\n", r.elevation));

        if let Some(best) = report.best() {
            md.push_str(&format!(
                "**Best match:** {} ({}% suitable)\n\n",
                best.species, best.score
            ));
        }

        md.push_str("## Species Compatibility\n\n");
        for (rank, score) in report.rankings.iter().enumerate() {
            Self::format_species(&mut md, rank + 1, score);
        }

        md
    }

    fn format_species(md: &mut String, rank: usize, score: &SuitabilityScore) {
        let band = score.band();
        md.push_str(&format!(
            "### {}. {} - {}% suitable ({})\n\n",
            rank, score.species, score.score, band.display_text()
        ));
        md.push_str(&format!("*{}*\n\n", band.description()));

        md.push_str("| Factor | Score |\n");
        md.push_str("|--------|-------|\n");
        md.push_str(&format!("| Temperature | {}% |\n", score.factors.temperature));
        md.push_str(&format!("| Moisture | {}% |\n", score.factors.moisture));
        md.push_str(&format!("| Soil | {}% |\n", score.factors.soil));
        md.push_str(&format!("| Light | {}% |\n\n", score.factors.light));

        if !score.challenges.is_empty() {
            md.push_str(&format!("**Challenges:** {}\n\n", score.challenges.join(", ")));
        }

        md.push_str("**Recommendations:**\n\n");
        for rec in &score.recommendations {
            md.push_str(&format!("- {}\n", rec));
        }
        md.push('\n');
    }
}
