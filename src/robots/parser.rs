//! Robots.txt parser implementation
//!
//! Turns raw robots.txt text into a [`Policy`]: an ordered list of rule groups
//! keyed by the user agents that declared them, plus document-level sitemaps.

use crate::robots::matcher::encode_pattern;
use crate::ParseError;
use std::borrow::Cow;

/// Whether a path rule grants or denies access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Allow,
    Disallow,
}

/// One recognized robots.txt line
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    UserAgent(String),
    Allow(String),
    Disallow(String),
    CrawlDelay(f64),
    Sitemap(String),
    /// A well-formed `key: value` line with a keyword we don't act on
    Unknown { key: String, value: String },
}

impl Directive {
    /// Parses a single line
    ///
    /// Comments and surrounding whitespace are stripped first. Returns `None`
    /// for blank lines, lines without a `:` separator and crawl-delay values
    /// that are not non-negative numbers.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            return None;
        }

        let Some((key, value)) = line.split_once(':') else {
            tracing::debug!("Skipping malformed robots.txt line: {}", line);
            return None;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();

        let directive = match key.as_str() {
            "user-agent" => Directive::UserAgent(value.to_string()),
            "allow" => Directive::Allow(value.to_string()),
            "disallow" => Directive::Disallow(value.to_string()),
            "crawl-delay" => match value.parse::<f64>() {
                Ok(delay) if delay.is_finite() && delay >= 0.0 => Directive::CrawlDelay(delay),
                _ => {
                    tracing::debug!("Skipping invalid crawl-delay value: {:?}", value);
                    return None;
                }
            },
            "sitemap" => Directive::Sitemap(value.to_string()),
            _ => Directive::Unknown {
                key,
                value: value.to_string(),
            },
        };

        Some(directive)
    }

    /// Returns true for the directive kinds that close a run of user-agent lines
    fn is_group_rule(&self) -> bool {
        matches!(
            self,
            Directive::Allow(_) | Directive::Disallow(_) | Directive::CrawlDelay(_)
        )
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// A single Allow/Disallow entry inside a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleKind,
    pub pattern: String,
}

/// Rules shared by one run of consecutive `User-agent` lines
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleGroup {
    /// Declared agent patterns, as written
    pub agents: Vec<String>,

    /// Allow/Disallow entries in document order
    pub rules: Vec<Rule>,

    /// Crawl delay in seconds, if the group declares one
    pub crawl_delay: Option<f64>,
}

impl RuleGroup {
    fn new(agent: String) -> Self {
        Self {
            agents: vec![agent],
            ..Self::default()
        }
    }

    /// Returns true if one of the declared patterns names `token` exactly
    ///
    /// Comparison is case-insensitive and ignores any `/version` suffix on the
    /// declared pattern.
    pub fn names_agent(&self, token: &str) -> bool {
        self.agents
            .iter()
            .map(|declared| product_token(declared))
            .any(|declared| declared != "*" && declared.eq_ignore_ascii_case(token))
    }

    /// Returns true if the group applies to any agent
    pub fn is_wildcard(&self) -> bool {
        self.agents.iter().any(|declared| declared.trim() == "*")
    }
}

/// Product token of a user-agent string: the text before the first `/`
pub(crate) fn product_token(agent: &str) -> &str {
    agent.split('/').next().unwrap_or_default().trim()
}

/// A fully parsed robots.txt document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolicyModel {
    /// Rule groups in document order
    pub groups: Vec<RuleGroup>,

    /// Sitemap URLs declared anywhere in the document
    pub sitemaps: Vec<String>,
}

impl PolicyModel {
    /// Builds the model from a sequence of directives
    pub fn from_directives<I>(directives: I) -> Self
    where
        I: IntoIterator<Item = Directive>,
    {
        let mut model = PolicyModel::default();
        let mut current: Option<RuleGroup> = None;
        let mut accepting_agents = true;

        for directive in directives {
            if directive.is_group_rule() {
                accepting_agents = false;
            }

            match directive {
                Directive::UserAgent(agent) => match current.as_mut() {
                    Some(group) if accepting_agents => group.agents.push(agent),
                    _ => {
                        if let Some(group) = current.take() {
                            model.groups.push(group);
                        }
                        current = Some(RuleGroup::new(agent));
                        accepting_agents = true;
                    }
                },
                Directive::Allow(pattern) => push_rule(&mut current, RuleKind::Allow, pattern),
                Directive::Disallow(pattern) => {
                    push_rule(&mut current, RuleKind::Disallow, pattern)
                }
                Directive::CrawlDelay(delay) => match current.as_mut() {
                    Some(group) => group.crawl_delay = Some(delay),
                    None => tracing::debug!("Ignoring crawl-delay before any user-agent line"),
                },
                Directive::Sitemap(url) => model.sitemaps.push(url),
                Directive::Unknown { key, .. } => {
                    tracing::debug!("Ignoring unknown robots.txt directive: {}", key)
                }
            }
        }

        if let Some(group) = current {
            model.groups.push(group);
        }

        model
    }
}

fn push_rule(current: &mut Option<RuleGroup>, kind: RuleKind, pattern: String) {
    match current.as_mut() {
        Some(group) => group.rules.push(Rule {
            kind,
            pattern: encode_pattern(&pattern).into_owned(),
        }),
        None => tracing::debug!("Ignoring {:?} rule before any user-agent line", kind),
    }
}

/// Decodes a raw robots.txt body as text
///
/// A leading UTF-8 byte-order mark is dropped. Bytes that are not valid UTF-8
/// become U+FFFD, so a stray Latin-1 byte only spoils the line it sits on.
/// Bodies containing NUL bytes are rejected as binary.
pub fn decode_policy_text(bytes: &[u8]) -> Result<Cow<'_, str>, ParseError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if let Some(offset) = bytes.iter().position(|&b| b == 0) {
        return Err(ParseError::Binary { offset });
    }

    let text = String::from_utf8_lossy(bytes);
    if matches!(text, Cow::Owned(_)) {
        tracing::debug!("robots.txt is not valid UTF-8; invalid bytes replaced");
    }
    Ok(text)
}

/// Splits a document into lines on `\n`, `\r` or both
pub(crate) fn policy_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
}

/// The recognized directives of a document, in order
pub fn parse_directives(text: &str) -> impl Iterator<Item = Directive> + '_ {
    policy_lines(text).filter_map(Directive::parse_line)
}

/// A robots.txt policy, or the absence of one
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Policy {
    /// No document (missing, unreachable or empty): everything is allowed
    #[default]
    Absent,

    /// A parsed document
    Rules(PolicyModel),
}

impl Policy {
    /// Parses robots.txt text
    ///
    /// Text with no content lines yields [`Policy::Absent`]. Malformed lines
    /// are skipped, so this never fails.
    pub fn from_text(text: &str) -> Self {
        let mut has_content = false;
        let directives: Vec<Directive> = policy_lines(text)
            .inspect(|line| {
                if !strip_comment(line).trim().is_empty() {
                    has_content = true;
                }
            })
            .filter_map(Directive::parse_line)
            .collect();

        if !has_content {
            return Policy::Absent;
        }

        let model = PolicyModel::from_directives(directives);
        tracing::debug!(
            "Parsed robots.txt: {} groups, {} sitemaps",
            model.groups.len(),
            model.sitemaps.len()
        );
        Policy::Rules(model)
    }

    /// Parses an optional document; `None` means the fetch found nothing
    pub fn from_optional_text(text: Option<&str>) -> Self {
        text.map(Self::from_text).unwrap_or_default()
    }

    /// Parses a raw response body
    ///
    /// # Returns
    ///
    /// * `Ok(Policy)` - The body decoded as UTF-8 (a leading BOM is ignored,
    ///   invalid sequences are replaced)
    /// * `Err(ParseError)` - The body is not text
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        decode_policy_text(bytes).map(|text| Self::from_text(&text))
    }

    /// Returns the parsed model, if there is one
    pub fn model(&self) -> Option<&PolicyModel> {
        match self {
            Policy::Absent => None,
            Policy::Rules(model) => Some(model),
        }
    }

    /// Returns the declared sitemap URLs
    pub fn sitemaps(&self) -> &[String] {
        self.model()
            .map(|model| model.sitemaps.as_slice())
            .unwrap_or_default()
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Policy::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(text: &str) -> PolicyModel {
        match Policy::from_text(text) {
            Policy::Rules(model) => model,
            Policy::Absent => panic!("expected a parsed model"),
        }
    }

    #[test]
    fn test_parse_line_directives() {
        assert_eq!(
            Directive::parse_line("User-agent: GPTBot"),
            Some(Directive::UserAgent("GPTBot".to_string()))
        );
        assert_eq!(
            Directive::parse_line("  DISALLOW : /admin  # keep out"),
            Some(Directive::Disallow("/admin".to_string()))
        );
        assert_eq!(
            Directive::parse_line("Crawl-delay: 2.5"),
            Some(Directive::CrawlDelay(2.5))
        );
        assert_eq!(
            Directive::parse_line("Sitemap: https://example.com/sitemap.xml"),
            Some(Directive::Sitemap(
                "https://example.com/sitemap.xml".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_line_skips_noise() {
        assert_eq!(Directive::parse_line(""), None);
        assert_eq!(Directive::parse_line("   # only a comment"), None);
        assert_eq!(Directive::parse_line("no separator here"), None);
        assert_eq!(Directive::parse_line("Crawl-delay: soon"), None);
        assert_eq!(Directive::parse_line("Crawl-delay: -3"), None);
    }

    #[test]
    fn test_parse_line_unknown_keyword() {
        assert_eq!(
            Directive::parse_line("Host: example.com"),
            Some(Directive::Unknown {
                key: "host".to_string(),
                value: "example.com".to_string()
            })
        );
    }

    #[test]
    fn test_consecutive_user_agents_share_group() {
        let model = model("User-agent: BotA\nUser-agent: BotB\nDisallow: /private");
        assert_eq!(model.groups.len(), 1);
        assert_eq!(model.groups[0].agents, vec!["BotA", "BotB"]);
        assert_eq!(model.groups[0].rules.len(), 1);
    }

    #[test]
    fn test_rule_line_closes_group() {
        let model = model("User-agent: BotA\nDisallow: /a\nUser-agent: BotB\nDisallow: /b");
        assert_eq!(model.groups.len(), 2);
        assert_eq!(model.groups[1].agents, vec!["BotB"]);
        assert_eq!(model.groups[1].rules[0].pattern, "/b");
    }

    #[test]
    fn test_crawl_delay_closes_group() {
        let model = model("User-agent: BotA\nCrawl-delay: 4\nUser-agent: BotB\nDisallow: /");
        assert_eq!(model.groups.len(), 2);
        assert_eq!(model.groups[0].crawl_delay, Some(4.0));
        assert_eq!(model.groups[1].crawl_delay, None);
    }

    #[test]
    fn test_blank_lines_do_not_split_agents() {
        let model = model("User-agent: BotA\n\nUser-agent: BotB\nDisallow: /");
        assert_eq!(model.groups.len(), 1);
        assert_eq!(model.groups[0].agents, vec!["BotA", "BotB"]);
    }

    #[test]
    fn test_rules_before_user_agent_ignored() {
        let model = model("Disallow: /orphan\nUser-agent: *\nAllow: /");
        assert_eq!(model.groups.len(), 1);
        assert_eq!(model.groups[0].rules.len(), 1);
        assert_eq!(model.groups[0].rules[0].kind, RuleKind::Allow);
    }

    #[test]
    fn test_sitemaps_collected_at_document_level() {
        let model = model(
            "Sitemap: https://example.com/a.xml\nUser-agent: *\nDisallow: /x\nSitemap: https://example.com/b.xml",
        );
        assert_eq!(
            model.sitemaps,
            vec!["https://example.com/a.xml", "https://example.com/b.xml"]
        );
        assert_eq!(model.groups[0].rules.len(), 1);
    }

    #[test]
    fn test_crlf_and_lone_cr_line_endings() {
        let model = model("User-agent: *\r\nDisallow: /a\rAllow: /a/b\r\n");
        assert_eq!(model.groups[0].rules.len(), 2);
    }

    #[test]
    fn test_empty_and_comment_only_documents_are_absent() {
        assert!(Policy::from_text("").is_absent());
        assert!(Policy::from_text("\n  \n# nothing to see\n").is_absent());
        assert!(Policy::from_optional_text(None).is_absent());
    }

    #[test]
    fn test_garbage_document_degrades_to_empty_model() {
        let model = model("This is not valid robots.txt {{{");
        assert!(model.groups.is_empty());
    }

    #[test]
    fn test_from_bytes_strips_bom() {
        let policy = Policy::from_bytes(b"\xEF\xBB\xBFUser-agent: *\nDisallow: /").unwrap();
        let model = policy.model().unwrap();
        assert_eq!(model.groups[0].agents, vec!["*"]);
    }

    #[test]
    fn test_from_bytes_rejects_binary() {
        let result = Policy::from_bytes(b"\x89PNG\r\n\x1a\n\x00\x00");
        assert!(matches!(result, Err(ParseError::Binary { offset: 8 })));
    }

    #[test]
    fn test_from_bytes_tolerates_latin1() {
        let policy = Policy::from_bytes(b"# Caf\xe9 robots\nUser-agent: *\nDisallow: /admin\n").unwrap();
        assert!(!policy.is_allowed("Googlebot", "/admin/users"));
        assert!(policy.is_allowed("Googlebot", "/"));

        let text = decode_policy_text(b"Disallow: /caf\xe9").unwrap();
        assert_eq!(text, "Disallow: /caf\u{FFFD}");
    }

    #[test]
    fn test_policy_lines_handles_all_line_endings() {
        let lines: Vec<&str> = policy_lines("a\rb\nc\r\nd")
            .filter(|line| !line.is_empty())
            .collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_cr_only_document() {
        let text = "User-agent: *\rDisallow: /tmp\rSitemap: https://example.com/s.xml\r";
        let directives: Vec<Directive> = parse_directives(text).collect();
        assert_eq!(directives.len(), 3);

        let model = model(text);
        assert_eq!(model.groups[0].rules.len(), 1);
        assert_eq!(model.sitemaps, vec!["https://example.com/s.xml"]);
    }

    #[test]
    fn test_names_agent_is_case_insensitive_and_exact() {
        let group = RuleGroup::new("GPTBot".to_string());
        assert!(group.names_agent("gptbot"));
        assert!(!group.names_agent("GPTBot-Extra"));
        assert!(!group.names_agent("GPT"));
        assert!(!group.is_wildcard());
        assert!(RuleGroup::new("*".to_string()).is_wildcard());
        assert!(!RuleGroup::new("*".to_string()).names_agent("*"));
    }

    #[test]
    fn test_product_token() {
        assert_eq!(product_token("ChatGPT-User/2.0"), "ChatGPT-User");
        assert_eq!(product_token("  Googlebot "), "Googlebot");
        assert_eq!(product_token("/1.0"), "");
    }
}
