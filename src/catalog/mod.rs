//! Catalog of known crawler user agents
//!
//! The catalog is an ordered list of `{category, name, agent}` records built
//! once at startup and passed by reference to the evaluator. Order is the
//! report order; duplicate identifiers are kept as listed.

mod builtin;

use builtin::BUILTIN_CATALOG;
use serde::{Deserialize, Serialize};

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Display category (e.g. "AI Crawlers")
    pub category: String,

    /// Display name (e.g. "GPTBot (Training)")
    pub name: String,

    /// User-agent identifier matched against robots.txt groups
    pub agent: String,
}

impl AgentRecord {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        agent: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            agent: agent.into(),
        }
    }
}

/// Ordered, read-only collection of agent records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<AgentRecord>,
}

impl Catalog {
    /// The built-in catalog
    pub fn builtin() -> Self {
        let records = BUILTIN_CATALOG
            .iter()
            .flat_map(|(category, entries)| {
                entries
                    .iter()
                    .map(move |(name, agent)| AgentRecord::new(*category, *name, *agent))
            })
            .collect();
        Self { records }
    }

    pub fn from_records(records: Vec<AgentRecord>) -> Self {
        Self { records }
    }

    /// Returns this catalog with `extra` appended after the existing records
    pub fn with_extra(mut self, extra: impl IntoIterator<Item = AgentRecord>) -> Self {
        self.records.extend(extra);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Category labels in first-appearance order, without repeats
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category.as_str()) {
                seen.push(&record.category);
            }
        }
        seen
    }

    /// Records belonging to `category`, in catalog order
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a AgentRecord> {
        self.records
            .iter()
            .filter(move |record| record.category == category)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a AgentRecord;
    type IntoIter = std::slice::Iter<'a, AgentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
