//! Output module for generating accessibility reports
//!
//! This module handles:
//! - Assembling a [`Report`] from evaluation results
//! - Aggregate statistics and derived insights
//! - Rendering as text, Markdown, CSV or JSON

mod csv_export;
pub mod insights;
mod json;
mod markdown;
mod report;
pub mod stats;
mod text;
mod traits;

pub use csv_export::CsvRenderer;
pub use insights::{generate_insights, Insight};
pub use json::JsonRenderer;
pub use markdown::{category_anchor, format_markdown_report, MarkdownRenderer};
pub use report::{policy_fingerprint, PolicySource, Report};
pub use stats::{format_statistics, CategoryStats, ReportStatistics};
pub use text::{format_text_report, TextRenderer};
pub use traits::{OutputError, OutputResult, ReportRenderer};

use serde::Deserialize;
use std::path::Path;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Csv,
    Json,
}

impl OutputFormat {
    /// Returns the renderer for this format
    pub fn renderer(self, show_policy: bool) -> Box<dyn ReportRenderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer { show_policy }),
            OutputFormat::Markdown => Box::new(MarkdownRenderer),
            OutputFormat::Csv => Box::new(CsvRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

/// Renders a report and writes it to `output_path`, or stdout when `None`
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to render or write
pub fn write_report(
    report: &Report<'_>,
    renderer: &dyn ReportRenderer,
    output_path: Option<&Path>,
) -> OutputResult<()> {
    let rendered = renderer.render(report)?;

    match output_path {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes())?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
