use crate::catalog::AgentRecord;
use crate::config::types::{CatalogConfig, Config, FetchConfig, ReportConfig};
use crate::ConfigError;

/// Upper bound on the fetch timeout
const MAX_TIMEOUT_SECS: u64 = 120;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_report_config(&config.report)?;
    validate_catalog_config(&config.catalog)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    // Must be usable as an HTTP header value
    if !config
        .user_agent
        .chars()
        .all(|c| c == ' ' || c.is_ascii_graphic())
    {
        return Err(ConfigError::Validation(format!(
            "user-agent must contain only printable ASCII characters, got '{}'",
            config.user_agent
        )));
    }

    Ok(())
}

/// Validates report configuration
fn validate_report_config(config: &ReportConfig) -> Result<(), ConfigError> {
    match &config.path {
        Some(path) => validate_report_path(path),
        None => Ok(()),
    }
}

/// Validates the path every agent is checked against
fn validate_report_path(path: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "report path must start with '/', got '{}'",
            path
        )));
    }

    if path.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "report path cannot contain whitespace, got '{}'",
            path
        )));
    }

    Ok(())
}

/// Validates catalog configuration
fn validate_catalog_config(config: &CatalogConfig) -> Result<(), ConfigError> {
    if !config.include_builtin && config.agents.is_empty() {
        return Err(ConfigError::Validation(
            "catalog is empty: enable include-builtin or add [[catalog.agent]] entries"
                .to_string(),
        ));
    }

    for agent in &config.agents {
        validate_agent_entry(agent)?;
    }

    Ok(())
}

/// Validates an extra catalog entry
fn validate_agent_entry(entry: &AgentRecord) -> Result<(), ConfigError> {
    if entry.category.trim().is_empty() || entry.name.trim().is_empty() {
        return Err(ConfigError::Validation(format!(
            "catalog agent '{}' needs a non-empty category and name",
            entry.agent
        )));
    }

    if entry.agent.trim().is_empty() {
        return Err(ConfigError::Validation(format!(
            "catalog agent '{}' has an empty agent identifier",
            entry.name
        )));
    }

    Ok(())
}
