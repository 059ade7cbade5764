//! robots.txt retrieval against a mock server

use crate::{serve_robots, small_catalog};
use crawlscope::config::FetchConfig;
use crawlscope::fetch::{build_http_client, fetch_robots, AbsentReason, FetchOutcome};
use crawlscope::url::normalize_site;
use crawlscope::{check_site, CrawlScopeError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client() -> reqwest::Client {
    let config = FetchConfig {
        timeout_secs: 5,
        user_agent: "CrawlScopeTest/1.0".to_string(),
    };
    build_http_client(&config).expect("Failed to build client")
}

#[tokio::test]
async fn test_fetch_found() {
    let mock_server = serve_robots(200, "User-agent: *\nDisallow: /private\n").await;
    let site = normalize_site(&mock_server.uri()).unwrap();

    let outcome = fetch_robots(&test_client(), &site).await.unwrap();
    assert!(outcome.is_found());

    match outcome {
        FetchOutcome::Found {
            url,
            status_code,
            body,
        } => {
            assert!(url.ends_with("/robots.txt"));
            assert_eq!(status_code, 200);
            assert_eq!(body, b"User-agent: *\nDisallow: /private\n");
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_uses_robots_location_of_deep_link() {
    let mock_server = serve_robots(200, "User-agent: *\nAllow: /\n").await;
    let site = normalize_site(&format!("{}/blog/post?id=3", mock_server.uri())).unwrap();

    let outcome = fetch_robots(&test_client(), &site).await.unwrap();
    assert!(outcome.is_found());
}

#[tokio::test]
async fn test_fetch_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .and(header("user-agent", "CrawlScopeTest/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let site = normalize_site(&mock_server.uri()).unwrap();
    let outcome = fetch_robots(&test_client(), &site).await.unwrap();
    assert!(outcome.is_found());
}

#[tokio::test]
async fn test_fetch_follows_redirect() {
    let mock_server = MockServer::start().await;
    let target = format!("{}/moved/robots.txt", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", target.as_str()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/moved/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /\n"))
        .mount(&mock_server)
        .await;

    let site = normalize_site(&mock_server.uri()).unwrap();
    match fetch_robots(&test_client(), &site).await.unwrap() {
        FetchOutcome::Found { url, .. } => assert_eq!(url, target),
        other => panic!("expected Found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_not_found_is_absent() {
    let mock_server = serve_robots(404, "not here").await;
    let site = normalize_site(&mock_server.uri()).unwrap();

    let outcome = fetch_robots(&test_client(), &site).await.unwrap();
    match outcome {
        FetchOutcome::Absent { reason, .. } => {
            assert_eq!(reason, AbsentReason::HttpStatus(404));
            assert_eq!(reason.to_string(), "HTTP status 404");
        }
        other => panic!("expected Absent, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_server_error_is_absent() {
    let mock_server = serve_robots(503, "").await;
    let site = normalize_site(&mock_server.uri()).unwrap();

    let outcome = fetch_robots(&test_client(), &site).await.unwrap();
    assert!(!outcome.is_found());
}

#[tokio::test]
async fn test_fetch_unreachable_is_absent() {
    // Port 9 (discard) on loopback is closed in test environments
    let site = normalize_site("http://127.0.0.1:9").unwrap();

    let outcome = fetch_robots(&test_client(), &site).await.unwrap();
    match outcome {
        FetchOutcome::Absent { reason, .. } => {
            assert!(matches!(
                reason,
                AbsentReason::Connect(_) | AbsentReason::Network(_)
            ));
        }
        other => panic!("expected Absent, got {:?}", other),
    }
}

#[tokio::test]
async fn test_check_site_end_to_end() {
    let body = "User-agent: GPTBot\n\
                Disallow: /\n\
                \n\
                User-agent: *\n\
                Disallow: /private\n\
                Crawl-delay: 2\n\
                \n\
                Sitemap: https://example.com/sitemap.xml\n";
    let mock_server = serve_robots(200, body).await;
    let site = normalize_site(&mock_server.uri()).unwrap();
    let catalog = small_catalog();

    let report = check_site(&test_client(), &site, &catalog, "/")
        .await
        .expect("check failed");

    assert!(report.policy_found());
    assert_eq!(report.results.len(), 5);
    assert_eq!(report.sitemaps, vec!["https://example.com/sitemap.xml"]);
    assert!(report.fingerprint.is_some());

    let gptbot = &report.results[2];
    assert_eq!(gptbot.agent.agent, "GPTBot");
    assert!(!gptbot.allowed);
    assert_eq!(gptbot.status_label(), "Blocked");

    let google = &report.results[0];
    assert!(google.allowed);
    assert_eq!(google.crawl_delay, Some(2.0));
    assert_eq!(google.delay_label(), "2s");

    assert_eq!(report.statistics.total, 5);
    assert_eq!(report.statistics.blocked, 1);
    assert_eq!(report.statistics.allowed, 4);
}

#[tokio::test]
async fn test_check_site_private_path() {
    let body = "User-agent: *\nDisallow: /private\nAllow: /private/public\n";
    let mock_server = serve_robots(200, body).await;
    let site = normalize_site(&mock_server.uri()).unwrap();
    let catalog = small_catalog();

    let blocked = check_site(&test_client(), &site, &catalog, "/private/data")
        .await
        .unwrap();
    assert_eq!(blocked.statistics.blocked, 5);

    let allowed = check_site(&test_client(), &site, &catalog, "/private/public/x")
        .await
        .unwrap();
    assert_eq!(allowed.statistics.allowed, 5);
}

#[tokio::test]
async fn test_check_site_missing_policy_allows_everything() {
    let mock_server = serve_robots(404, "").await;
    let site = normalize_site(&mock_server.uri()).unwrap();
    let catalog = small_catalog();

    let report = check_site(&test_client(), &site, &catalog, "/")
        .await
        .unwrap();

    assert!(!report.policy_found());
    assert_eq!(report.source.note.as_deref(), Some("HTTP status 404"));
    assert!(report.fingerprint.is_none());
    assert!(report.results.iter().all(|r| r.allowed && !r.is_error()));
    assert!(report
        .insights
        .iter()
        .any(|insight| insight.title.contains("No robots.txt")));
}

#[tokio::test]
async fn test_check_site_binary_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, b'P', b'N', b'G', 0x00, 0x01]))
        .mount(&mock_server)
        .await;

    let site = normalize_site(&mock_server.uri()).unwrap();
    let catalog = small_catalog();

    let result = check_site(&test_client(), &site, &catalog, "/").await;
    assert!(matches!(result, Err(CrawlScopeError::Parse(_))));
}

#[tokio::test]
async fn test_check_site_latin1_body_still_evaluates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"# Caf\xe9 robots\nUser-agent: *\nDisallow: /\n".to_vec()),
        )
        .mount(&mock_server)
        .await;

    let site = normalize_site(&mock_server.uri()).unwrap();
    let catalog = small_catalog();

    let report = check_site(&test_client(), &site, &catalog, "/")
        .await
        .expect("a stray Latin-1 byte must not abort the check");
    assert!(report.policy_found());
    assert_eq!(report.statistics.blocked, 5);
}

#[tokio::test]
async fn test_check_site_strips_byte_order_mark() {
    let mock_server = MockServer::start().await;
    let mut body = vec![0xEF, 0xBB, 0xBF];
    body.extend_from_slice(b"User-agent: *\nDisallow: /\n");

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(&mock_server)
        .await;

    let site = normalize_site(&mock_server.uri()).unwrap();
    let catalog = small_catalog();

    let report = check_site(&test_client(), &site, &catalog, "/")
        .await
        .unwrap();
    assert_eq!(report.statistics.blocked, 5);
}
