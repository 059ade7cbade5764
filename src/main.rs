//! CrawlScope main entry point
//!
//! This is the command-line interface for the CrawlScope crawler access checker.

use anyhow::Context;
use clap::Parser;
use crawlscope::config::{load_config_or_default, validate, Config};
use crawlscope::fetch::build_http_client;
use crawlscope::output::{write_report, OutputFormat};
use crawlscope::url::{normalize_site, robots_url};
use crawlscope::{check_file, check_site, Catalog, Report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// CrawlScope: which crawlers may access a website?
///
/// Fetches the site's robots.txt and reports, for several hundred known
/// crawlers grouped by category, whether each one is allowed or blocked.
#[derive(Parser, Debug)]
#[command(name = "crawlscope")]
#[command(version)]
#[command(about = "Check which crawlers a site's robots.txt allows", long_about = None)]
struct Cli {
    /// Website to analyze (e.g. example.com or https://example.com)
    #[arg(value_name = "SITE")]
    site: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Evaluate a local robots.txt file instead of fetching one
    #[arg(long, value_name = "FILE")]
    robots_file: Option<PathBuf>,

    /// Path to check for every crawler (default: the SITE URL's own path)
    #[arg(short, long)]
    path: Option<String>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE", conflicts_with = "export")]
    output: Option<PathBuf>,

    /// Write the report to crawlscope_analysis_<host>.<ext> in the current directory
    #[arg(long)]
    export: bool,

    /// Include the raw robots.txt content in text output
    #[arg(long)]
    show_policy: bool,

    /// Fetch timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Show what would be checked without any network access
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;
    let site = normalize_site(&cli.site).with_context(|| format!("invalid site '{}'", cli.site))?;
    let catalog = config.build_catalog();
    let path = config.report.target_path(&site);

    if cli.dry_run {
        return handle_dry_run(&config, &site, &path, &catalog, &cli);
    }

    let report = if let Some(file) = &cli.robots_file {
        check_file(&site, file, &catalog, &path)
            .with_context(|| format!("failed to read robots.txt from {}", file.display()))?
    } else {
        tracing::info!("Analyzing {} ({} crawlers)", site, catalog.len());
        let client = build_http_client(&config.fetch).context("failed to build HTTP client")?;
        check_site(&client, &site, &catalog, &path)
            .await
            .with_context(|| format!("failed to analyze {}", site))?
    };

    handle_report(&report, &config, &cli)
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout only carries the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("crawlscope=info,warn"),
            1 => EnvFilter::new("crawlscope=debug,info"),
            2 => EnvFilter::new("crawlscope=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
    }
    let mut config = load_config_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    if let Some(path) = &cli.path {
        config.report.path = Some(path.clone());
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if let Some(timeout) = cli.timeout {
        config.fetch.timeout_secs = timeout;
    }

    validate(&config).context("invalid command-line option")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be checked
fn handle_dry_run(
    config: &Config,
    site: &url::Url,
    path: &str,
    catalog: &Catalog,
    cli: &Cli,
) -> anyhow::Result<()> {
    println!("=== CrawlScope Dry Run ===\n");

    println!("Site: {}", site);
    match &cli.robots_file {
        Some(file) => println!("robots.txt: {} (local file)", file.display()),
        None => println!("robots.txt: {}", robots_url(site)?),
    }
    println!("Checked path: {}", path);
    println!("Format: {:?}", config.report.format);

    println!("\nFetch:");
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  User agent: {}", config.fetch.user_agent);

    println!("\nCatalog ({} crawlers):", catalog.len());
    for category in catalog.categories() {
        println!("  - {} ({})", category, catalog.in_category(category).count());
    }

    println!("\n✓ Configuration is valid");
    Ok(())
}

/// Renders the report to the requested destination
fn handle_report(report: &Report<'_>, config: &Config, cli: &Cli) -> anyhow::Result<()> {
    let renderer = config.report.format.renderer(cli.show_policy);
    let output = if cli.export {
        Some(PathBuf::from(report.export_file_name(renderer.extension())))
    } else {
        cli.output.clone()
    };

    write_report(report, renderer.as_ref(), output.as_deref()).context("failed to write report")?;

    if let Some(path) = output {
        if !cli.quiet {
            eprintln!("✓ Report exported to: {}", path.display());
        }
    }

    Ok(())
}
