//! Markdown report generation
//!
//! The document mirrors the interactive report: summary metrics, quick
//! navigation, category analysis, per-category sections, the complete table,
//! the policy text and insights.

use crate::output::report::Report;
use crate::output::traits::{OutputResult, ReportRenderer};

/// Renders a report as Markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, report: &Report<'_>) -> OutputResult<String> {
        Ok(format_markdown_report(report))
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

/// URL-safe anchor for a category heading
///
/// # Examples
///
/// ```
/// use crawlscope::output::category_anchor;
///
/// assert_eq!(category_anchor("SEO & Analytics"), "seo-and-analytics");
/// ```
pub fn category_anchor(category: &str) -> String {
    category.to_lowercase().replace(' ', "-").replace('&', "and")
}

/// Escapes characters that would break a table cell
fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Formats a report as markdown
pub fn format_markdown_report(report: &Report<'_>) -> String {
    let stats = &report.statistics;
    let mut md = String::new();

    md.push_str(&format!("# CrawlScope Analysis: {}\n\n", report.host));

    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Site**: {}\n", report.site));
    md.push_str(&format!("- **robots.txt**: {}\n", report.source.location));
    match &report.source.note {
        None => md.push_str("- **Status**: fetched\n"),
        Some(note) => md.push_str(&format!(
            "- **Status**: not available ({}); all crawlers are allowed by default\n",
            note
        )),
    }
    if let Some(fingerprint) = &report.fingerprint {
        md.push_str(&format!("- **SHA-256**: `{}`\n", fingerprint));
    }
    md.push_str(&format!("- **Checked path**: `{}`\n", report.path));
    md.push_str(&format!(
        "- **Generated**: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str("## Analysis Results\n\n");
    md.push_str("| Total Crawlers | Allowed | Blocked | Block Rate |\n");
    md.push_str("|----------------|---------|---------|------------|\n");
    md.push_str(&format!(
        "| {} | {} | {} | {:.1}% |\n\n",
        stats.total,
        stats.allowed,
        stats.blocked,
        stats.block_rate()
    ));

    md.push_str("## Quick Navigation\n\n");
    md.push_str("**Main Sections**: [Category Analysis](#category-analysis) | ");
    md.push_str("[Complete Analysis](#complete-analysis) | ");
    md.push_str("[robots.txt Content](#robots-content) | ");
    md.push_str("[Key Insights](#key-insights)\n\n");
    md.push_str("**Individual Categories**:\n\n");
    for category in &stats.categories {
        md.push_str(&format!(
            "- [{}](#{})\n",
            category.category,
            category_anchor(&category.category)
        ));
    }
    md.push('\n');

    md.push_str("<a id=\"category-analysis\"></a>\n\n## Category Analysis\n\n");
    md.push_str("| Category | Total | Allowed | Blocked | Block Rate % |\n");
    md.push_str("|----------|-------|---------|---------|--------------|\n");
    for category in &stats.categories {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {:.1} |\n",
            cell(&category.category),
            category.total,
            category.allowed,
            category.blocked,
            category.block_rate()
        ));
    }
    md.push('\n');

    for category in &stats.categories {
        md.push_str(&format!(
            "<a id=\"{}\"></a>\n\n### {}\n\n",
            category_anchor(&category.category),
            category.category
        ));
        md.push_str(&format!(
            "Total: {} | Allowed: {} ({:.1}%) | Blocked: {} ({:.1}%)\n\n",
            category.total,
            category.allowed,
            category.allow_rate(),
            category.blocked,
            category.block_rate()
        ));
        md.push_str("| Platform | Access Status | Crawl Delay |\n");
        md.push_str("|----------|---------------|-------------|\n");
        for result in report.results_in(&category.category) {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                cell(&result.agent.name),
                cell(&result.status_label()),
                result.delay_label()
            ));
        }
        md.push('\n');
    }

    md.push_str("<a id=\"complete-analysis\"></a>\n\n## Complete Analysis Table\n\n");
    md.push_str("| Category | Platform | User Agent | Access Status | Crawl Delay |\n");
    md.push_str("|----------|----------|------------|---------------|-------------|\n");
    for result in &report.results {
        md.push_str(&format!(
            "| {} | {} | `{}` | {} | {} |\n",
            cell(&result.agent.category),
            cell(&result.agent.name),
            cell(&result.agent.agent),
            cell(&result.status_label()),
            result.delay_label()
        ));
    }
    md.push('\n');

    md.push_str("<a id=\"robots-content\"></a>\n\n## robots.txt Content\n\n");
    match &report.source.text {
        Some(text) => {
            md.push_str("```text\n");
            md.push_str(text);
            if !text.ends_with('\n') {
                md.push('\n');
            }
            md.push_str("```\n\n");
        }
        None => md.push_str("_No robots.txt content was retrieved._\n\n"),
    }

    if !report.sitemaps.is_empty() {
        md.push_str("### Sitemaps\n\n");
        for sitemap in &report.sitemaps {
            md.push_str(&format!("- {}\n", sitemap));
        }
        md.push('\n');
    }

    md.push_str("<a id=\"key-insights\"></a>\n\n## Key Insights\n\n");
    for insight in &report.insights {
        md.push_str(&format!("- **{}**: {}\n", insight.title, insight.detail));
    }

    md
}
