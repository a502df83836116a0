//! Report output formatting for the CLI
//!
//! Renders a [`SuiteReport`] as a human-readable console report, or as JSON
//! or YAML for tooling.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::suite::{CaseOutcome, SuiteReport};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!(
                "Unsupported output format: '{}'. Use 'text', 'json', or 'yaml'.",
                s
            ),
        }
    }
}

/// Render the report in the requested format
pub fn render(report: &SuiteReport, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, color)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).context("Failed to serialize report to YAML")
        }
    }
}

/// Console report: one line per case, indented failure details, then the tally
pub fn render_text(report: &SuiteReport, color: bool) -> String {
    let mut lines = vec![format!("Smoke suite: {}", report.target), String::new()];

    for case in &report.cases {
        let label = format!("{:<5}", case.outcome.label());
        let label = if color { paint(&case.outcome, &label) } else { label };
        lines.push(format!("  {} {} ({} ms)", label, case.name, case.elapsed_ms));

        match &case.outcome {
            CaseOutcome::Passed => {}
            CaseOutcome::Failed { message, detail } => {
                lines.push(format!("        {}", message));
                if let Some(detail) = detail {
                    lines.push(format!("        {}", detail));
                }
            }
            CaseOutcome::Errored { message } => {
                lines.push(format!("        {}", message));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Ran {} cases: {} passed, {} failed, {} errored",
        report.total(),
        report.passed,
        report.failed,
        report.errored
    ));

    let verdict = if report.is_success() { "OK" } else { "FAILED" };
    lines.push(match (color, report.is_success()) {
        (false, _) => verdict.to_string(),
        (true, true) => verdict.green().to_string(),
        (true, false) => verdict.red().to_string(),
    });

    lines.join("\n")
}

fn paint(outcome: &CaseOutcome, label: &str) -> String {
    match outcome {
        CaseOutcome::Passed => label.green().to_string(),
        CaseOutcome::Failed { .. } => label.red().to_string(),
        CaseOutcome::Errored { .. } => label.yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::CaseReport;

    fn sample_report() -> SuiteReport {
        let mut report = SuiteReport::new("http://localhost:5173/");
        report.record(CaseReport {
            name: "website_loads".to_string(),
            description: "Website loads with HTTP 200 and an HTML content type".to_string(),
            outcome: CaseOutcome::Passed,
            elapsed_ms: 12,
        });
        report.record(CaseReport {
            name: "website_title".to_string(),
            description: "Website body contains a title tag".to_string(),
            outcome: CaseOutcome::Failed {
                message: "Website should have a title tag".to_string(),
                detail: Some("'<title' not found in 10 byte body".to_string()),
            },
            elapsed_ms: 8,
        });
        report
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("yaml").unwrap(), OutputFormat::Yaml);
        assert!(OutputFormat::parse("table").is_err());
    }

    #[test]
    fn test_text_report_lists_cases_and_tally() {
        let text = render_text(&sample_report(), false);
        assert!(text.starts_with("Smoke suite: http://localhost:5173/"));
        assert!(text.contains("  PASS  website_loads (12 ms)"));
        assert!(text.contains("  FAIL  website_title (8 ms)"));
        assert!(text.contains("        Website should have a title tag"));
        assert!(text.contains("Ran 2 cases: 1 passed, 1 failed, 0 errored"));
        assert!(text.ends_with("FAILED"));
    }

    #[test]
    fn test_text_report_layout() {
        let text = render_text(&sample_report(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Smoke suite: http://localhost:5173/",
                "",
                "  PASS  website_loads (12 ms)",
                "  FAIL  website_title (8 ms)",
                "        Website should have a title tag",
                "        '<title' not found in 10 byte body",
                "",
                "Ran 2 cases: 1 passed, 1 failed, 0 errored",
                "FAILED",
            ]
        );
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_text_report_without_color_has_no_escapes() {
        let text = render_text(&sample_report(), false);
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_json_report() {
        let json = render(&sample_report(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["failed"], 1);
        assert_eq!(value["cases"][1]["status"], "failed");
        assert_eq!(value["cases"][1]["message"], "Website should have a title tag");
    }

    #[test]
    fn test_yaml_report() {
        let yaml = render(&sample_report(), OutputFormat::Yaml, false).unwrap();
        assert!(yaml.contains("target:"));
        assert!(yaml.contains("localhost:5173"));
        assert!(yaml.contains("status: passed"));
    }
}
