use url::Url;

/// Returns the site's host label: lowercase host, plus `_<port>` when the URL
/// names a non-default port
///
/// The label ends up in export file names, so the port separator is `_`
/// rather than `:`.
///
/// # Examples
///
/// ```
/// use crawlscope::url::{normalize_site, site_host};
///
/// let site = normalize_site("HTTPS://Example.COM/path").unwrap();
/// assert_eq!(site_host(&site).as_deref(), Some("example.com"));
///
/// let local = normalize_site("http://127.0.0.1:8080").unwrap();
/// assert_eq!(site_host(&local).as_deref(), Some("127.0.0.1_8080"));
/// ```
pub fn site_host(site: &Url) -> Option<String> {
    let host = site.host_str()?.to_lowercase();
    match site.port() {
        Some(port) => Some(format!("{}_{}", host, port)),
        None => Some(host),
    }
}
