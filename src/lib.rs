//! CrawlScope: a crawler access checker
//!
//! This crate fetches a site's robots.txt, evaluates a catalog of known crawler
//! user agents against it, and renders a categorized accessibility report.

pub mod catalog;
pub mod check;
pub mod config;
pub mod fetch;
pub mod output;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Error type for a whole site check
#[derive(Debug, Error)]
pub enum CrawlScopeError {
    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("robots.txt parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Raised when a robots.txt document cannot be read as text at all
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document looks binary (NUL byte at offset {offset})")]
    Binary { offset: usize },
}

/// Per-agent evaluation failure; never aborts a batch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("agent identifier is empty")]
    EmptyAgent,

    #[error("cannot interpret '{0}' as a request path")]
    InvalidPath(String),
}

/// Result type alias for site checks
pub type Result<T> = std::result::Result<T, CrawlScopeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use catalog::{AgentRecord, Catalog};
pub use check::{check_file, check_site};
pub use config::Config;
pub use output::{OutputFormat, Report};
pub use robots::{evaluate, evaluate_path, AccessDecision, AccessResult, Policy, PolicyModel};
