use crate::catalog::{AgentRecord, Catalog};
use crate::output::OutputFormat;
use crate::url::site_path;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Default bound on the robots.txt fetch
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with the robots.txt request
pub const DEFAULT_USER_AGENT: &str = concat!("CrawlScope/", env!("CARGO_PKG_VERSION"));

/// Main configuration structure for CrawlScope
///
/// Every section is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub report: ReportConfig,
    pub catalog: CatalogConfig,
}

impl Config {
    /// Builds the catalog this configuration describes
    pub fn build_catalog(&self) -> Catalog {
        let base = if self.catalog.include_builtin {
            Catalog::builtin()
        } else {
            Catalog::default()
        };
        base.with_extra(self.catalog.agents.iter().cloned())
    }
}

/// Robots.txt retrieval settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User agent header for the request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Report settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path every agent is checked against; unset means the site URL's own
    /// path and query
    pub path: Option<String>,

    /// Output format when none is given on the command line
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: OutputFormat::Text,
        }
    }
}

impl ReportConfig {
    /// The path to check for `site`
    pub fn target_path(&self, site: &Url) -> String {
        match &self.path {
            Some(path) => path.clone(),
            None => site_path(site),
        }
    }
}

/// Agent catalog settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Whether the built-in agent list is evaluated
    #[serde(rename = "include-builtin")]
    pub include_builtin: bool,

    /// Additional agents, appended after the built-in list
    #[serde(rename = "agent")]
    pub agents: Vec<AgentRecord>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            agents: Vec::new(),
        }
    }
}
