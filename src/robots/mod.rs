//! Robots.txt handling module
//!
//! This module parses robots.txt documents into a queryable [`Policy`] and
//! answers "may agent A fetch path P" questions against it.

mod evaluator;
mod matcher;
mod parser;

pub use evaluator::{evaluate, evaluate_path, AccessDecision, AccessResult, ROOT_PATH};
pub use matcher::pattern_matches;
pub use parser::{
    decode_policy_text, parse_directives, Directive, Policy, PolicyModel, Rule, RuleGroup,
    RuleKind,
};

/// Checks if a path is allowed by robots.txt
///
/// # Arguments
///
/// * `robots` - The parsed robots.txt policy
/// * `path` - The path or absolute URL to check
/// * `user_agent` - The agent identifier
///
/// # Returns
///
/// * `true` - If the path is allowed
/// * `false` - If the path is disallowed or the input could not be evaluated
pub fn is_allowed(robots: &Policy, path: &str, user_agent: &str) -> bool {
    robots.is_allowed(user_agent, path)
}
