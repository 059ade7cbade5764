//! Robots.txt retrieval
//!
//! One bounded GET per site. Any failure is reported as an absent document,
//! which callers treat as "no restrictions".

mod fetcher;

pub use fetcher::{build_http_client, fetch_policy, AbsentReason, FetchOutcome};

use crate::url::robots_url;
use crate::UrlError;
use reqwest::Client;
use url::Url;

/// Fetches the robots.txt belonging to `site`
///
/// # Returns
///
/// * `Ok(FetchOutcome)` - The document, or why there is none
/// * `Err(UrlError)` - The robots.txt URL could not be derived from `site`
pub async fn fetch_robots(client: &Client, site: &Url) -> Result<FetchOutcome, UrlError> {
    let robots = robots_url(site)?;
    Ok(fetch_policy(client, &robots).await)
}
