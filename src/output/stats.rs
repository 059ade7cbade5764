//! Aggregate statistics over evaluation results
//!
//! Counts are computed overall and per category. Evaluation errors count as
//! blocked, and are also tallied separately.

use crate::robots::AccessResult;
use serde::Serialize;

/// Counts for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub total: usize,
    pub allowed: usize,
    pub blocked: usize,
    pub errors: usize,
}

impl CategoryStats {
    fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            total: 0,
            allowed: 0,
            blocked: 0,
            errors: 0,
        }
    }

    fn record(&mut self, result: &AccessResult<'_>) {
        self.total += 1;
        if result.allowed {
            self.allowed += 1;
        } else {
            self.blocked += 1;
        }
        if result.is_error() {
            self.errors += 1;
        }
    }

    /// Percentage of blocked agents, 0 for an empty category
    pub fn block_rate(&self) -> f64 {
        percentage(self.blocked, self.total)
    }

    /// Percentage of allowed agents, 0 for an empty category
    pub fn allow_rate(&self) -> f64 {
        percentage(self.allowed, self.total)
    }
}

/// Report-wide statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStatistics {
    pub total: usize,
    pub allowed: usize,
    pub blocked: usize,
    pub errors: usize,

    /// Per-category counts in catalog order
    pub categories: Vec<CategoryStats>,
}

impl ReportStatistics {
    /// Aggregates results, keeping categories in first-appearance order
    pub fn from_results(results: &[AccessResult<'_>]) -> Self {
        let mut categories: Vec<CategoryStats> = Vec::new();

        for result in results {
            let category = result.agent.category.as_str();
            let idx = match categories.iter().position(|c| c.category == category) {
                Some(idx) => idx,
                None => {
                    categories.push(CategoryStats::new(category));
                    categories.len() - 1
                }
            };
            categories[idx].record(result);
        }

        let allowed = categories.iter().map(|c| c.allowed).sum();
        let errors = categories.iter().map(|c| c.errors).sum();

        Self {
            total: results.len(),
            allowed,
            blocked: results.len() - allowed,
            errors,
            categories,
        }
    }

    /// Percentage of blocked agents overall
    pub fn block_rate(&self) -> f64 {
        percentage(self.blocked, self.total)
    }

    /// Looks up a category by label
    pub fn category(&self, label: &str) -> Option<&CategoryStats> {
        self.categories.iter().find(|c| c.category == label)
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}

/// Formats statistics as plain text
pub fn format_statistics(stats: &ReportStatistics) -> String {
    let mut out = String::new();

    out.push_str("Summary:\n");
    out.push_str(&format!("  Total crawlers: {}\n", stats.total));
    out.push_str(&format!("  Allowed: {}\n", stats.allowed));
    out.push_str(&format!("  Blocked: {}\n", stats.blocked));
    if stats.errors > 0 {
        out.push_str(&format!("  Evaluation errors: {}\n", stats.errors));
    }
    out.push_str(&format!("  Block rate: {:.1}%\n\n", stats.block_rate()));

    let width = stats
        .categories
        .iter()
        .map(|c| c.category.len())
        .max()
        .unwrap_or(0)
        .max("Category".len());

    out.push_str("Category Analysis:\n");
    out.push_str(&format!(
        "  {:<width$}  {:>5}  {:>7}  {:>7}  {:>7}\n",
        "Category",
        "Total",
        "Allowed",
        "Blocked",
        "Block %",
        width = width
    ));
    for category in &stats.categories {
        out.push_str(&format!(
            "  {:<width$}  {:>5}  {:>7}  {:>7}  {:>6.1}%\n",
            category.category,
            category.total,
            category.allowed,
            category.blocked,
            category.block_rate(),
            width = width
        ));
    }

    out
}
