//! Renderer trait and output errors
//!
//! Every export format implements [`ReportRenderer`], turning a finished
//! [`Report`] into a string.

use crate::output::report::Report;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for report renderers
pub trait ReportRenderer {
    /// Renders the report
    fn render(&self, report: &Report<'_>) -> OutputResult<String>;

    /// File extension used for exported files (without the dot)
    fn extension(&self) -> &'static str;
}
