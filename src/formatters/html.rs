use pulldown_cmark::{html, Options, Parser};

use super::{MarkdownFormatter, SuitabilityReport};

/// HTML formatter for suitability reports
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format report as standalone HTML with embedded CSS
    ///
    /// The body is the markdown report rendered with pulldown-cmark.
    pub fn format(report: &SuitabilityReport) -> String {
        let markdown = MarkdownFormatter::format(report);

        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        let parser = Parser::new_ext(&markdown, options);

        let mut body = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut body, parser);

        let mut page = String::with_capacity(body.len() + 1024);
        page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        page.push_str("<meta charset=\"UTF-8\">\n");
        page.push_str("<title>Environmental Suitability Analysis</title>\n");
        page.push_str("<style>\n");
        page.push_str("body { font-family: system-ui, sans-serif; max-width: 800px; margin: 40px auto; padding: 20px; line-height: 1.6; }\n");
        page.push_str("h1 { color: #2c3e50; margin-bottom: 10px; }\n");
        page.push_str("h2 { color: #34495e; border-bottom: 2px solid #ecf0f1; padding-bottom: 5px; margin-top: 30px; }\n");
        page.push_str("h3 { color: #34495e; margin-top: 20px; }\n");
        page.push_str("table { width: 100%; border-collapse: collapse; margin: 16px 0; }\n");
        page.push_str("th { background: #34495e; color: white; text-align: left; padding: 12px; font-weight: 600; }\n");
        page.push_str("td { padding: 12px; border-bottom: 1px solid #ecf0f1; }\n");
        page.push_str("</style>\n</head>\n<body>\n");
        page.push_str(&body);
        page.push_str("</body>\n</html>\n");

        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suitability::{rank_species, sample_reading};

    #[test]
    fn test_format_html() {
        let reading = sample_reading("southern_swamp").unwrap();
        let report = SuitabilityReport::new(reading, rank_species(&reading));

        let html = HtmlFormatter::format(&report);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Environmental Suitability Analysis</h1>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("Iris Virginica"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
