//! Integration tests for CrawlScope
//!
//! These tests use wiremock to serve robots.txt documents and exercise the
//! fetch, evaluate and render cycle end-to-end.

mod fetch_tests;
mod report_tests;

use crawlscope::{AgentRecord, Catalog};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A small catalog covering the categories the insights look at
pub fn small_catalog() -> Catalog {
    Catalog::from_records(vec![
        AgentRecord::new("Search Engines", "Google", "Googlebot"),
        AgentRecord::new("Search Engines", "Bing", "Bingbot"),
        AgentRecord::new("AI Crawlers", "GPTBot (Training)", "GPTBot"),
        AgentRecord::new("AI Crawlers", "Claude", "ClaudeBot"),
        AgentRecord::new("Social Media", "Facebook", "facebookexternalhit"),
    ])
}

/// Starts a mock server answering GET /robots.txt with `status` and `body`
pub async fn serve_robots(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&mock_server)
        .await;

    mock_server
}
