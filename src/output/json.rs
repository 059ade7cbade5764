//! JSON export

use crate::output::insights::Insight;
use crate::output::report::Report;
use crate::output::stats::ReportStatistics;
use crate::output::traits::{OutputResult, ReportRenderer};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'r> {
    site: &'r str,
    robots_url: &'r str,
    policy_found: bool,
    fetch_note: Option<&'r str>,
    fingerprint: Option<&'r str>,
    sitemaps: &'r [String],
    path: &'r str,
    generated_at: DateTime<Utc>,
    summary: &'r ReportStatistics,
    results: Vec<JsonResult<'r>>,
    insights: &'r [Insight],
}

#[derive(Debug, Serialize)]
struct JsonResult<'r> {
    category: &'r str,
    platform: &'r str,
    user_agent: &'r str,
    allowed: bool,
    crawl_delay: Option<f64>,
    error: Option<&'r str>,
}

/// Renders the full report as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &Report<'_>) -> OutputResult<String> {
        let document = JsonReport {
            site: &report.site,
            robots_url: &report.source.location,
            policy_found: report.policy_found(),
            fetch_note: report.source.note.as_deref(),
            fingerprint: report.fingerprint.as_deref(),
            sitemaps: &report.sitemaps,
            path: &report.path,
            generated_at: report.generated_at,
            summary: &report.statistics,
            results: report
                .results
                .iter()
                .map(|result| JsonResult {
                    category: &result.agent.category,
                    platform: &result.agent.name,
                    user_agent: &result.agent.agent,
                    allowed: result.allowed,
                    crawl_delay: result.crawl_delay,
                    error: result.error.as_deref(),
                })
                .collect(),
            insights: &report.insights,
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
