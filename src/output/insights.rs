//! Human-readable observations derived from a report
//!
//! Thresholds compare block rates in percent. Category rates are rounded to
//! one decimal place before comparison.

use crate::output::stats::{CategoryStats, ReportStatistics};
use crate::robots::{parse_directives, Directive};
use serde::Serialize;

pub const AI_CRAWLERS: &str = "AI Crawlers";
pub const SEARCH_ENGINES: &str = "Search Engines";
pub const SEO_ANALYTICS: &str = "SEO & Analytics";
pub const SOCIAL_MEDIA: &str = "Social Media";

/// A single observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub title: String,
    pub detail: String,
}

impl Insight {
    fn new(title: &str, detail: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            detail: detail.into(),
        }
    }
}

/// Generates insights from aggregate statistics and the policy text
///
/// # Arguments
///
/// * `stats` - Aggregated evaluation results
/// * `policy_text` - The robots.txt document, or `None` when there was none
pub fn generate_insights(stats: &ReportStatistics, policy_text: Option<&str>) -> Vec<Insight> {
    if stats.total == 0 {
        return vec![Insight::new(
            "No data",
            "No data available for analysis",
        )];
    }

    let mut insights = vec![overall_insight(stats.block_rate())];
    insights.extend(stats.category(AI_CRAWLERS).map(ai_insight));
    insights.extend(stats.category(SEARCH_ENGINES).map(search_insight));
    insights.extend(stats.category(SEO_ANALYTICS).map(seo_insight));
    insights.extend(stats.category(SOCIAL_MEDIA).map(social_insight));

    match policy_text.filter(|text| !text.trim().is_empty()) {
        Some(text) => insights.extend(policy_insights(text)),
        None => insights.push(Insight::new(
            "No robots.txt",
            "Creating a robots.txt file gives you control over crawler access",
        )),
    }

    insights
}

fn overall_insight(rate: f64) -> Insight {
    if rate > 70.0 {
        Insight::new(
            "High Security Mode",
            format!("{:.1}% of crawlers are blocked - excellent for privacy protection", rate),
        )
    } else if rate > 40.0 {
        Insight::new(
            "Balanced Access",
            format!("{:.1}% of crawlers are blocked - moderate protection", rate),
        )
    } else if rate > 10.0 {
        Insight::new(
            "Open Policy",
            format!("{:.1}% of crawlers are blocked - prioritizing visibility", rate),
        )
    } else {
        Insight::new(
            "Fully Open",
            format!("Only {:.1}% of crawlers are blocked - maximum accessibility", rate),
        )
    }
}

fn ai_insight(stats: &CategoryStats) -> Insight {
    let rate = rounded_rate(stats);
    let counts = format!("{}/{} AI crawlers blocked ({:.1}%)", stats.blocked, stats.total, rate);
    if rate > 80.0 {
        Insight::new(
            "AI Privacy Strong",
            format!("{} - protecting content from training", counts),
        )
    } else if rate > 50.0 {
        Insight::new(
            "AI Privacy Moderate",
            format!("{} - balanced AI access", counts),
        )
    } else {
        Insight::new(
            "AI Training Allowed",
            format!("Only {} - content available for training", counts),
        )
    }
}

fn search_insight(stats: &CategoryStats) -> Insight {
    let rate = rounded_rate(stats);
    if rate > 30.0 {
        Insight::new(
            "SEO Warning",
            format!("{:.1}% of search engines blocked - may impact search visibility", rate),
        )
    } else if rate > 10.0 {
        Insight::new(
            "SEO Caution",
            format!("{:.1}% of search engines blocked - monitor search impact", rate),
        )
    } else {
        Insight::new(
            "SEO Friendly",
            format!("Only {:.1}% of search engines blocked - excellent for visibility", rate),
        )
    }
}

fn seo_insight(stats: &CategoryStats) -> Insight {
    let rate = rounded_rate(stats);
    if rate > 60.0 {
        Insight::new(
            "Limited Analytics",
            format!("{:.1}% of SEO tools blocked - reduced insights available", rate),
        )
    } else if rate > 30.0 {
        Insight::new(
            "Moderate Analytics",
            format!("{:.1}% of SEO tools blocked - some insights limited", rate),
        )
    } else {
        Insight::new(
            "Full Analytics",
            format!("Only {:.1}% of SEO tools blocked - comprehensive insights available", rate),
        )
    }
}

fn social_insight(stats: &CategoryStats) -> Insight {
    let rate = rounded_rate(stats);
    if rate > 50.0 {
        Insight::new(
            "Social Privacy",
            format!("{:.1}% of social platforms blocked - limited social sharing", rate),
        )
    } else {
        Insight::new(
            "Social Friendly",
            format!("Only {:.1}% of social platforms blocked - good for sharing", rate),
        )
    }
}

/// Observations about the document itself
fn policy_insights(text: &str) -> Vec<Insight> {
    let directives: Vec<Directive> = parse_directives(text).collect();
    let mut insights = Vec::new();

    if !directives.iter().any(|d| matches!(d, Directive::Sitemap(_))) {
        insights.push(Insight::new(
            "Missing Sitemap",
            "Add 'Sitemap: https://yoursite.com/sitemap.xml' to help crawlers find your content",
        ));
    }

    let uses_wildcards = directives.iter().any(|d| match d {
        Directive::Disallow(value) | Directive::UserAgent(value) => value.contains('*'),
        _ => false,
    });
    if uses_wildcards {
        insights.push(Insight::new(
            "Using Wildcards",
            "Good use of universal rules for efficient crawler management",
        ));
    }

    let recognized = directives
        .iter()
        .filter(|d| !matches!(d, Directive::Unknown { .. }))
        .count();
    if recognized < 3 {
        insights.push(Insight::new(
            "Simple robots.txt",
            "Consider adding more specific rules for better crawler control",
        ));
    }

    insights
}

fn rounded_rate(stats: &CategoryStats) -> f64 {
    (stats.block_rate() * 10.0).round() / 10.0
}
