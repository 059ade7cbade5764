//! Rendering and export of complete reports

use crate::{serve_robots, small_catalog};
use crawlscope::config::{parse_config, FetchConfig};
use crawlscope::fetch::build_http_client;
use crawlscope::output::{
    category_anchor, write_report, CsvRenderer, JsonRenderer, MarkdownRenderer, ReportRenderer,
    TextRenderer,
};
use crawlscope::url::normalize_site;
use crawlscope::{check_file, check_site, OutputFormat, Report};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const POLICY: &str = "User-agent: GPTBot\n\
                      User-agent: ClaudeBot\n\
                      Disallow: /\n\
                      \n\
                      User-agent: *\n\
                      Allow: /\n\
                      Crawl-delay: 5\n";

fn report_from_file<'a>(catalog: &'a crawlscope::Catalog, body: &str) -> Report<'a> {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(body.as_bytes()).unwrap();

    let site = normalize_site("example.com").unwrap();
    check_file(&site, file.path(), catalog, "/").expect("check failed")
}

#[test]
fn test_text_report() {
    let catalog = small_catalog();
    let report = report_from_file(&catalog, POLICY);

    let text = TextRenderer { show_policy: false }.render(&report).unwrap();
    assert!(text.contains("=== CrawlScope Analysis ==="));
    assert!(text.contains("Site: https://example.com/"));
    assert!(text.contains("Key Insights:"));
    assert!(!text.contains("robots.txt Content:"));

    let with_policy = TextRenderer { show_policy: true }.render(&report).unwrap();
    assert!(with_policy.contains("robots.txt Content:"));
    assert!(with_policy.contains("User-agent: ClaudeBot"));
}

#[test]
fn test_markdown_report() {
    let catalog = small_catalog();
    let report = report_from_file(&catalog, POLICY);

    let md = MarkdownRenderer.render(&report).unwrap();
    assert!(md.starts_with("# CrawlScope Analysis: example.com"));
    assert!(md.contains("## Quick Navigation"));
    assert!(md.contains(&format!("<a id=\"{}\"></a>", category_anchor("AI Crawlers"))));
    assert!(md.contains("## Complete Analysis Table"));
    assert!(md.contains("| AI Crawlers | GPTBot (Training) | `GPTBot` | Blocked |"));
    assert!(md.contains("```text\nUser-agent: GPTBot"));
}

#[test]
fn test_csv_report() {
    let catalog = small_catalog();
    let report = report_from_file(&catalog, POLICY);

    let csv = CsvRenderer.render(&report).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "Category,Platform,User Agent,Access Status,Crawl Delay,Can Access"
    );
    assert_eq!(lines[1], "Search Engines,Google,Googlebot,Allowed,5s,true");
    assert_eq!(
        lines[3],
        "AI Crawlers,GPTBot (Training),GPTBot,Blocked,None,false"
    );
}

#[test]
fn test_json_report() {
    let catalog = small_catalog();
    let report = report_from_file(&catalog, POLICY);

    let json = JsonRenderer.render(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["site"], "https://example.com/");
    assert_eq!(value["policy_found"], true);
    assert_eq!(value["summary"]["total"], 5);
    assert_eq!(value["summary"]["blocked"], 2);
    assert_eq!(value["results"].as_array().unwrap().len(), 5);
    assert_eq!(value["results"][2]["user_agent"], "GPTBot");
    assert_eq!(value["results"][2]["allowed"], false);
    assert_eq!(value["results"][0]["crawl_delay"], 5.0);
    assert_eq!(
        value["fingerprint"].as_str().map(str::len),
        Some(64),
        "fingerprint should be a hex SHA-256"
    );
}

#[test]
fn test_write_report_to_file() {
    let catalog = small_catalog();
    let report = report_from_file(&catalog, POLICY);
    let dir = TempDir::new().unwrap();

    let renderer = OutputFormat::Csv.renderer(false);
    let path = dir.path().join(report.export_file_name(renderer.extension()));
    write_report(&report, renderer.as_ref(), Some(&path)).unwrap();

    assert!(path.ends_with("crawlscope_analysis_example.com.csv"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Category,Platform"));
}

#[test]
fn test_config_drives_catalog_and_format() {
    let config = parse_config(
        r#"
[report]
path = "/private"
format = "markdown"

[catalog]
include-builtin = false

[[catalog.agent]]
category = "Internal"
name = "Our Bot"
agent = "OurBot"
"#,
    )
    .unwrap();

    let catalog = config.build_catalog();
    assert_eq!(catalog.len(), 1);

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"User-agent: OurBot\nDisallow: /private\n")
        .unwrap();
    let site = normalize_site("intranet.example").unwrap();
    let report = check_file(&site, file.path(), &catalog, &config.report.target_path(&site)).unwrap();

    assert!(!report.results[0].allowed);

    let rendered = config.report.format.renderer(false).render(&report).unwrap();
    assert!(rendered.contains("### Internal"));
}

#[test]
fn test_site_url_path_is_checked_by_default() {
    let config = parse_config("").unwrap();
    let catalog = small_catalog();

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"User-agent: *\nDisallow: /private/\n").unwrap();

    let site = normalize_site("example.com/private/page").unwrap();
    let path = config.report.target_path(&site);
    let report = check_file(&site, file.path(), &catalog, &path).unwrap();

    assert_eq!(report.path, "/private/page");
    assert_eq!(report.statistics.blocked, 5);

    let root = normalize_site("example.com").unwrap();
    let report = check_file(&root, file.path(), &catalog, &config.report.target_path(&root)).unwrap();
    assert_eq!(report.path, "/");
    assert_eq!(report.statistics.allowed, 5);
}

#[tokio::test]
async fn test_builtin_catalog_against_fetched_policy() {
    let body = "User-agent: GPTBot\nDisallow: /\n\nUser-agent: *\nDisallow:\n";
    let mock_server = serve_robots(200, body).await;
    let site = normalize_site(&mock_server.uri()).unwrap();
    let client = build_http_client(&FetchConfig::default()).unwrap();
    let catalog = crawlscope::Catalog::builtin();

    let report = check_site(&client, &site, &catalog, "/").await.unwrap();

    assert_eq!(report.results.len(), 328);
    assert_eq!(report.statistics.errors, 0);
    let blocked: Vec<&str> = report
        .results
        .iter()
        .filter(|r| !r.allowed)
        .map(|r| r.agent.agent.as_str())
        .collect();
    assert!(!blocked.is_empty());
    assert!(blocked.iter().all(|agent| *agent == "GPTBot"));

    let ai = report.statistics.category("AI Crawlers").unwrap();
    assert!(ai.blocked >= 1);
}
