//! End-to-end site check
//!
//! Fetches (or reads) a robots.txt, parses it once and evaluates the whole
//! catalog against it. A missing document is not an error: the report then
//! shows every crawler as allowed.

use crate::catalog::Catalog;
use crate::fetch::{fetch_robots, FetchOutcome};
use crate::output::{PolicySource, Report};
use crate::robots::{decode_policy_text, Policy};
use crate::Result;
use reqwest::Client;
use std::path::Path;
use url::Url;

/// Fetches `site`'s robots.txt and builds the report
///
/// # Arguments
///
/// * `client` - HTTP client built with [`crate::fetch::build_http_client`]
/// * `site` - Normalized site URL
/// * `catalog` - Agents to evaluate
/// * `path` - Path every agent is checked against
///
/// # Returns
///
/// * `Ok(Report)` - The report (all-allowed when no robots.txt was retrieved)
/// * `Err(CrawlScopeError)` - The robots.txt URL could not be derived, or the
///   document was binary
pub async fn check_site<'a>(
    client: &Client,
    site: &Url,
    catalog: &'a Catalog,
    path: &str,
) -> Result<Report<'a>> {
    let (source, policy) = match fetch_robots(client, site).await? {
        FetchOutcome::Found {
            url,
            status_code,
            body,
        } => {
            let text = decode_policy_text(&body)?;
            tracing::info!("Fetched robots.txt from {} (HTTP {})", url, status_code);
            let policy = Policy::from_text(&text);
            (PolicySource::found(url, text), policy)
        }
        FetchOutcome::Absent { url, reason } => {
            tracing::warn!(
                "Could not fetch robots.txt from {}: {}; treating every crawler as allowed",
                url,
                reason
            );
            (PolicySource::absent(url, reason.to_string()), Policy::Absent)
        }
    };

    Ok(Report::build(site, source, &policy, catalog, path))
}

/// Builds the report from a local robots.txt file instead of fetching
pub fn check_file<'a>(
    site: &Url,
    file: &Path,
    catalog: &'a Catalog,
    path: &str,
) -> Result<Report<'a>> {
    let bytes = std::fs::read(file)?;
    let text = decode_policy_text(&bytes)?;
    tracing::info!("Read robots.txt from {}", file.display());

    let policy = Policy::from_text(&text);
    let source = PolicySource::found(file.display().to_string(), text);
    Ok(Report::build(site, source, &policy, catalog, path))
}
