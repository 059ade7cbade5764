use crate::{UrlError, UrlResult};
use url::Url;

/// Normalizes user input into a site URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; reject empty input
/// 2. Prepend `https://` when the input carries no scheme
/// 3. Parse the URL; reject if malformed
/// 4. Accept only HTTP and HTTPS schemes
/// 5. Require a host
/// 6. Remove the fragment
///
/// # Examples
///
/// ```
/// use crawlscope::url::normalize_site;
///
/// let url = normalize_site("example.com").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/");
/// ```
pub fn normalize_site(input: &str) -> UrlResult<Url> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlError::Parse("site URL is empty".to_string()));
    }

    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    let mut url = Url::parse(&candidate).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    url.set_fragment(None);
    Ok(url)
}

/// Returns the robots.txt location for a site: its origin plus `/robots.txt`
///
/// # Examples
///
/// ```
/// use crawlscope::url::{normalize_site, robots_url};
///
/// let site = normalize_site("http://example.com:8080/blog/post?id=1").unwrap();
/// assert_eq!(robots_url(&site).unwrap().as_str(), "http://example.com:8080/robots.txt");
/// ```
pub fn robots_url(site: &Url) -> UrlResult<Url> {
    site.join("/robots.txt")
        .map_err(|e| UrlError::Parse(e.to_string()))
}

/// The site URL's path plus query, e.g. `/private/page?id=1`
///
/// # Examples
///
/// ```
/// use crawlscope::url::{normalize_site, site_path};
///
/// assert_eq!(site_path(&normalize_site("example.com").unwrap()), "/");
/// let site = normalize_site("example.com/private/page?id=1").unwrap();
/// assert_eq!(site_path(&site), "/private/page?id=1");
/// ```
pub fn site_path(site: &Url) -> String {
    match site.query() {
        Some(query) => format!("{}?{}", site.path(), query),
        None => site.path().to_string(),
    }
}
