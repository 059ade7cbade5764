//! Access decisions against a parsed robots.txt policy
//!
//! Group selection prefers groups naming the agent over `*` groups. Within
//! the selected rules the longest matching pattern wins, and Allow wins a tie.

use crate::catalog::{AgentRecord, Catalog};
use crate::robots::matcher::pattern_matches;
use crate::robots::parser::{product_token, Policy, PolicyModel, RuleGroup, RuleKind};
use crate::url::site_path;
use crate::EvaluationError;
use url::Url;

/// Path checked when evaluating whole-site access
pub const ROOT_PATH: &str = "/";

/// Placeholder host used to parse bare paths
const PATH_BASE_HOST: &str = "robots.invalid";

/// Outcome of a single access check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessDecision {
    pub allowed: bool,
    pub crawl_delay: Option<f64>,
}

impl AccessDecision {
    /// The decision when no rule applies
    pub fn unrestricted() -> Self {
        Self {
            allowed: true,
            crawl_delay: None,
        }
    }
}

/// Access outcome for one catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct AccessResult<'a> {
    /// The catalog entry that was evaluated
    pub agent: &'a AgentRecord,

    /// Whether the agent may fetch the path (false when evaluation failed)
    pub allowed: bool,

    /// Crawl delay in seconds from the matched group
    pub crawl_delay: Option<f64>,

    /// Why evaluation failed, if it did
    pub error: Option<String>,
}

impl<'a> AccessResult<'a> {
    fn from_outcome(
        agent: &'a AgentRecord,
        outcome: Result<AccessDecision, EvaluationError>,
    ) -> Self {
        match outcome {
            Ok(decision) => Self {
                agent,
                allowed: decision.allowed,
                crawl_delay: decision.crawl_delay,
                error: None,
            },
            Err(e) => Self {
                agent,
                allowed: false,
                crawl_delay: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Human-readable access status
    pub fn status_label(&self) -> String {
        match &self.error {
            Some(note) => format!("Error: {}", note),
            None if self.allowed => "Allowed".to_string(),
            None => "Blocked".to_string(),
        }
    }

    /// Human-readable crawl delay
    pub fn delay_label(&self) -> String {
        if self.is_error() {
            return "N/A".to_string();
        }
        match self.crawl_delay {
            Some(delay) if delay > 0.0 => format!("{}s", delay),
            _ => "None".to_string(),
        }
    }
}

impl PolicyModel {
    /// Decides access for an already-normalized agent token and path
    pub fn decide(&self, token: &str, path: &str) -> AccessDecision {
        let groups = self.select_groups(token);
        if groups.is_empty() {
            tracing::trace!("No group applies to {}; allowing {}", token, path);
            return AccessDecision::unrestricted();
        }

        let mut best: Option<(usize, RuleKind)> = None;
        for rule in groups.iter().flat_map(|group| group.rules.iter()) {
            if rule.pattern.is_empty() || !pattern_matches(&rule.pattern, path) {
                continue;
            }

            let len = rule.pattern.len();
            best = match best {
                Some((best_len, _)) if len > best_len => Some((len, rule.kind)),
                Some((best_len, _)) if len == best_len && rule.kind == RuleKind::Allow => {
                    Some((len, rule.kind))
                }
                None => Some((len, rule.kind)),
                keep => keep,
            };
        }

        let allowed = !matches!(best, Some((_, RuleKind::Disallow)));
        let crawl_delay = groups.iter().find_map(|group| group.crawl_delay);

        tracing::trace!(
            "{} {} -> {} (matched {:?})",
            token,
            path,
            if allowed { "allowed" } else { "blocked" },
            best
        );

        AccessDecision {
            allowed,
            crawl_delay,
        }
    }

    /// Groups naming the agent, or failing that the `*` groups
    fn select_groups(&self, token: &str) -> Vec<&RuleGroup> {
        let named: Vec<&RuleGroup> = self
            .groups
            .iter()
            .filter(|group| group.names_agent(token))
            .collect();
        if !named.is_empty() {
            return named;
        }

        self.groups
            .iter()
            .filter(|group| group.is_wildcard())
            .collect()
    }
}

impl Policy {
    /// Checks whether `agent` may fetch `target`
    ///
    /// # Arguments
    ///
    /// * `agent` - The agent identifier (any `/version` suffix is ignored)
    /// * `target` - A path starting with `/`, or an absolute http(s) URL
    ///
    /// # Returns
    ///
    /// * `Ok(AccessDecision)` - The decision and the applicable crawl delay
    /// * `Err(EvaluationError)` - The agent or target could not be interpreted
    pub fn check(&self, agent: &str, target: &str) -> Result<AccessDecision, EvaluationError> {
        let model = match self {
            Policy::Absent => return Ok(AccessDecision::unrestricted()),
            Policy::Rules(model) => model,
        };

        let token = product_token(agent);
        if token.is_empty() {
            return Err(EvaluationError::EmptyAgent);
        }
        let path = request_path(target)?;

        Ok(model.decide(token, &path))
    }

    /// Convenience wrapper: evaluation errors count as blocked
    pub fn is_allowed(&self, agent: &str, target: &str) -> bool {
        self.check(agent, target)
            .map(|decision| decision.allowed)
            .unwrap_or(false)
    }

    /// Crawl delay that applies to `agent`, if any
    pub fn crawl_delay(&self, agent: &str) -> Option<f64> {
        self.check(agent, ROOT_PATH)
            .ok()
            .and_then(|decision| decision.crawl_delay)
    }

    /// Evaluates every catalog entry against `target`, in catalog order
    ///
    /// Failures are recorded on the affected result and never stop the pass.
    pub fn evaluate_catalog<'a>(&self, catalog: &'a Catalog, target: &str) -> Vec<AccessResult<'a>> {
        catalog
            .iter()
            .map(|record| {
                let outcome = self.check(&record.agent, target);
                if let Err(e) = &outcome {
                    tracing::warn!("Could not evaluate {} ({}): {}", record.name, record.agent, e);
                }
                AccessResult::from_outcome(record, outcome)
            })
            .collect()
    }
}

/// Extracts the path (plus query) to match rules against
///
/// Bare paths go through the same URL parser as absolute URLs, so both forms
/// come out percent-encoded identically.
fn request_path(target: &str) -> Result<String, EvaluationError> {
    let target = target.trim();
    let parsed = if target.starts_with('/') {
        Url::parse(&format!("http://{}{}", PATH_BASE_HOST, target))
    } else {
        Url::parse(target)
    };

    match parsed {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(site_path(&url)),
        _ => Err(EvaluationError::InvalidPath(target.to_string())),
    }
}

/// Parses `policy_text` and evaluates the whole catalog against the site root
///
/// `None` (or empty text) means no policy: every agent is allowed.
pub fn evaluate<'a>(policy_text: Option<&str>, catalog: &'a Catalog) -> Vec<AccessResult<'a>> {
    evaluate_path(policy_text, catalog, ROOT_PATH)
}

/// Like [`evaluate`], checking `path` instead of the site root
pub fn evaluate_path<'a>(
    policy_text: Option<&str>,
    catalog: &'a Catalog,
    path: &str,
) -> Vec<AccessResult<'a>> {
    Policy::from_optional_text(policy_text).evaluate_catalog(catalog, path)
}
