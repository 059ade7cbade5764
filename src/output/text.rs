//! Plain-text report for the terminal

use crate::output::report::Report;
use crate::output::stats::format_statistics;
use crate::output::traits::{OutputResult, ReportRenderer};

/// Renders a report as plain text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    /// Append the raw robots.txt content
    pub show_policy: bool,
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &Report<'_>) -> OutputResult<String> {
        Ok(format_text_report(report, self.show_policy))
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

/// Formats a report as plain text
pub fn format_text_report(report: &Report<'_>, show_policy: bool) -> String {
    let mut out = String::new();

    out.push_str("=== CrawlScope Analysis ===\n\n");
    out.push_str(&format!("Site: {}\n", report.site));
    match &report.source.note {
        None => out.push_str(&format!("robots.txt: {}\n", report.source.location)),
        Some(note) => {
            out.push_str(&format!(
                "robots.txt: not available at {} ({})\n",
                report.source.location, note
            ));
            out.push_str("All crawlers are allowed by default.\n");
        }
    }
    if let Some(fingerprint) = &report.fingerprint {
        out.push_str(&format!("SHA-256: {}\n", fingerprint));
    }
    out.push_str(&format!("Checked path: {}\n\n", report.path));

    out.push_str(&format_statistics(&report.statistics));
    out.push('\n');

    let name_width = report
        .results
        .iter()
        .map(|r| r.agent.name.chars().count())
        .max()
        .unwrap_or(0);

    for category in &report.statistics.categories {
        out.push_str(&format!(
            "--- {} ({}/{} allowed) ---\n",
            category.category, category.allowed, category.total
        ));
        for result in report.results_in(&category.category) {
            out.push_str(&format!(
                "  {:<width$}  {:<8}  {}\n",
                result.agent.name,
                result.status_label(),
                result.delay_label(),
                width = name_width
            ));
        }
        out.push('\n');
    }

    if !report.sitemaps.is_empty() {
        out.push_str("Sitemaps:\n");
        for sitemap in &report.sitemaps {
            out.push_str(&format!("  - {}\n", sitemap));
        }
        out.push('\n');
    }

    out.push_str("Key Insights:\n");
    for insight in &report.insights {
        out.push_str(&format!("  * {}: {}\n", insight.title, insight.detail));
    }

    if show_policy {
        if let Some(text) = &report.source.text {
            out.push_str("\nrobots.txt Content:\n");
            out.push_str(text);
            if !text.ends_with('\n') {
                out.push('\n');
            }
        }
    }

    out
}
