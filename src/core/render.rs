//! Renderer module
//!
//! Renders a Report to one of the output formats: text, json

use crate::core::model::{Finding, Report};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string, newline terminated
    pub fn render(&self, report: &Report) -> serde_json::Result<String> {
        match self.config.format {
            OutputFormat::Text => Ok(self.render_text(report)),
            OutputFormat::Json => self.render_json(report),
        }
    }

    fn render_text(&self, report: &Report) -> String {
        let mut output = format!("File: {}\n", report.file);
        for finding in &report.results {
            output.push_str(&format!(
                "{} {}: {}\n",
                report.policy.phrase(),
                finding.category.word(),
                display_character(finding)
            ));
        }
        output
    }

    fn render_json(&self, report: &Report) -> serde_json::Result<String> {
        let mut output = if self.config.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        output.push('\n');
        Ok(output)
    }
}

fn display_character(finding: &Finding) -> String {
    match finding.character {
        Some(c) => c.to_string(),
        None => "None".to_string(),
    }
}

/// Line printed on stdout when a run fails
pub fn render_failure(exit_code: u8) -> String {
    format!("Program exited with error code: {}\n", exit_code)
}
