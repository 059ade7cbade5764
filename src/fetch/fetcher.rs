//! HTTP fetcher implementation
//!
//! This module handles the single robots.txt request:
//! - Building an HTTP client with the configured user agent and timeout
//! - One GET per site, no retries
//! - Classifying failures so the caller can fall back to "no policy"

use crate::config::FetchConfig;
use reqwest::{redirect::Policy, Client};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Upper bound on the connect phase, independent of the overall timeout
const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Redirect hops followed before giving up
const MAX_REDIRECTS: usize = 5;

/// Result of a robots.txt fetch
#[derive(Debug)]
pub enum FetchOutcome {
    /// 2xx response
    Found {
        /// Final URL after redirects
        url: String,
        /// HTTP status code
        status_code: u16,
        /// Raw response body
        body: Vec<u8>,
    },

    /// No usable document; treated as "everything allowed"
    Absent {
        /// The URL that was requested
        url: String,
        /// Why nothing was retrieved
        reason: AbsentReason,
    },
}

impl FetchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, FetchOutcome::Found { .. })
    }
}

/// Why a robots.txt fetch produced no document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsentReason {
    /// Server answered with a non-2xx status
    HttpStatus(u16),
    /// Request exceeded the configured timeout
    Timeout,
    /// Could not connect (refused, DNS, TLS)
    Connect(String),
    /// Anything else, including body read failures
    Network(String),
}

impl fmt::Display for AbsentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbsentReason::HttpStatus(code) => write!(f, "HTTP status {}", code),
            AbsentReason::Timeout => write!(f, "request timed out"),
            AbsentReason::Connect(e) => write!(f, "connection failed: {}", e),
            AbsentReason::Network(e) => write!(f, "network error: {}", e),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use crawlscope::config::FetchConfig;
/// use crawlscope::fetch::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let timeout = config.timeout();

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(timeout)
        .connect_timeout(timeout.min(MAX_CONNECT_TIMEOUT))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a robots.txt URL once
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | 2xx | `Found` with the body |
/// | Any other status | `Absent(HttpStatus)` |
/// | Timeout | `Absent(Timeout)` |
/// | Connection refused / DNS / TLS | `Absent(Connect)` |
/// | Other transport or body error | `Absent(Network)` |
pub async fn fetch_policy(client: &Client, url: &Url) -> FetchOutcome {
    let requested = url.to_string();
    tracing::debug!("GET {}", requested);

    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchOutcome::Absent {
                url: requested,
                reason: classify_error(&e),
            }
        }
    };

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return FetchOutcome::Absent {
            url: final_url,
            reason: AbsentReason::HttpStatus(status.as_u16()),
        };
    }

    match response.bytes().await {
        Ok(body) => {
            tracing::debug!("Fetched {} bytes from {}", body.len(), final_url);
            FetchOutcome::Found {
                url: final_url,
                status_code: status.as_u16(),
                body: body.to_vec(),
            }
        }
        Err(e) => FetchOutcome::Absent {
            url: final_url,
            reason: classify_error(&e),
        },
    }
}

fn classify_error(e: &reqwest::Error) -> AbsentReason {
    if e.is_timeout() {
        AbsentReason::Timeout
    } else if e.is_connect() {
        AbsentReason::Connect(e.to_string())
    } else {
        AbsentReason::Network(e.to_string())
    }
}
