//! URL handling module for CrawlScope
//!
//! Turns the user's site input into a normalized URL and derives the
//! robots.txt location and host name from it.

mod domain;
mod normalize;

pub use domain::site_host;
pub use normalize::{normalize_site, robots_url, site_path};
