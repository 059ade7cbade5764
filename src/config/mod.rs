//! Configuration module for CrawlScope
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file.
//!
//! # Example
//!
//! ```no_run
//! use crawlscope::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawlscope.toml")).unwrap();
//! println!("Timeout: {}s", config.fetch.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CatalogConfig, Config, FetchConfig, ReportConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};

pub use validation::validate;
