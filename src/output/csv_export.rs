//! CSV export of per-agent results

use crate::output::report::Report;
use crate::output::traits::{OutputError, OutputResult, ReportRenderer};
use crate::robots::AccessResult;
use serde::Serialize;

/// One CSV row
#[derive(Debug, Serialize)]
struct CsvRow<'r> {
    #[serde(rename = "Category")]
    category: &'r str,
    #[serde(rename = "Platform")]
    platform: &'r str,
    #[serde(rename = "User Agent")]
    user_agent: &'r str,
    #[serde(rename = "Access Status")]
    access_status: String,
    #[serde(rename = "Crawl Delay")]
    crawl_delay: String,
    #[serde(rename = "Can Access")]
    can_access: bool,
}

impl<'r> From<&'r AccessResult<'_>> for CsvRow<'r> {
    fn from(result: &'r AccessResult<'_>) -> Self {
        Self {
            category: &result.agent.category,
            platform: &result.agent.name,
            user_agent: &result.agent.agent,
            access_status: result.status_label(),
            crawl_delay: result.delay_label(),
            can_access: result.allowed,
        }
    }
}

/// Renders per-agent results as CSV with a header row
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl ReportRenderer for CsvRenderer {
    fn render(&self, report: &Report<'_>) -> OutputResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for result in &report.results {
            writer.serialize(CsvRow::from(result))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| OutputError::Format(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| OutputError::Format(e.to_string()))
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}
