//! The assembled accessibility report
//!
//! A [`Report`] bundles everything the renderers need: where the policy came
//! from, the per-agent results, aggregate statistics and insights.

use crate::catalog::Catalog;
use crate::output::insights::{generate_insights, Insight};
use crate::output::stats::ReportStatistics;
use crate::robots::{AccessResult, Policy};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Where the evaluated policy came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySource {
    /// robots.txt URL (or local file path) that was read
    pub location: String,

    /// Decoded document text, when one was retrieved
    pub text: Option<String>,

    /// Why no document is available, when none is
    pub note: Option<String>,
}

impl PolicySource {
    pub fn found(location: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            text: Some(text.into()),
            note: None,
        }
    }

    pub fn absent(location: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            text: None,
            note: Some(note.into()),
        }
    }
}

/// A complete accessibility report for one site
#[derive(Debug, Clone)]
pub struct Report<'a> {
    /// Normalized site URL
    pub site: String,

    /// Lowercase host, used for export file names
    pub host: String,

    /// Where the policy came from
    pub source: PolicySource,

    /// SHA-256 of the policy text, hex encoded
    pub fingerprint: Option<String>,

    /// Sitemaps declared by the policy
    pub sitemaps: Vec<String>,

    /// Path every agent was checked against
    pub path: String,

    /// When the report was produced
    pub generated_at: DateTime<Utc>,

    /// The evaluated catalog, for category ordering
    pub catalog: &'a Catalog,

    /// One result per catalog entry, in catalog order
    pub results: Vec<AccessResult<'a>>,

    /// Aggregate counts
    pub statistics: ReportStatistics,

    /// Derived observations
    pub insights: Vec<Insight>,
}

impl<'a> Report<'a> {
    /// Evaluates `catalog` against `policy` and assembles the report
    ///
    /// # Arguments
    ///
    /// * `site` - The normalized site URL
    /// * `source` - Where the policy text came from
    /// * `policy` - The parsed policy (use [`Policy::Absent`] when there is none)
    /// * `catalog` - The agents to evaluate
    /// * `path` - The path to check
    pub fn build(
        site: &url::Url,
        source: PolicySource,
        policy: &Policy,
        catalog: &'a Catalog,
        path: &str,
    ) -> Self {
        let results = policy.evaluate_catalog(catalog, path);
        let statistics = ReportStatistics::from_results(&results);
        let insights = generate_insights(&statistics, source.text.as_deref());
        let fingerprint = source.text.as_deref().map(policy_fingerprint);

        tracing::info!(
            "Evaluated {} agents: {} allowed, {} blocked",
            statistics.total,
            statistics.allowed,
            statistics.blocked
        );

        Self {
            site: site.to_string(),
            host: crate::url::site_host(site).unwrap_or_default(),
            source,
            fingerprint,
            sitemaps: policy.sitemaps().to_vec(),
            path: path.to_string(),
            generated_at: Utc::now(),
            catalog,
            results,
            statistics,
            insights,
        }
    }

    /// Whether a robots.txt document was found
    pub fn policy_found(&self) -> bool {
        self.source.text.is_some()
    }

    /// Results for `category`, in catalog order
    pub fn results_in<'r>(
        &'r self,
        category: &'r str,
    ) -> impl Iterator<Item = &'r AccessResult<'a>> + 'r {
        self.results
            .iter()
            .filter(move |result| result.agent.category == category)
    }

    /// Suggested file name for an export, e.g. `crawlscope_analysis_example.com.csv`
    pub fn export_file_name(&self, extension: &str) -> String {
        let host = if self.host.is_empty() {
            "site"
        } else {
            self.host.as_str()
        };
        format!("crawlscope_analysis_{}.{}", host, extension)
    }
}

/// SHA-256 of the policy text, hex encoded
pub fn policy_fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
