//! Function suffix rewriting
//!
//! GL encodes the argument shape of a command in its name tail
//! (`Uniform1fv`, `GetQueryObjectui64v`). The rewrite table maps each tail to
//! the canonical wrapper suffix. Rules are sorted once by descending pattern
//! length so that `2x3fv` always wins over `fv`.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Single (pattern, replacement) rewrite rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    /// Exact trailing character sequence, underscores included
    pub pattern: String,
    pub replacement: String,
}

impl SuffixRule {
    pub fn new<P: Into<String>, R: Into<String>>(pattern: P, replacement: R) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Successful suffix lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch<'n, 'r> {
    /// Name with the matched pattern removed (never empty)
    pub stem: &'n str,
    pub rule: &'r SuffixRule,
}

impl SuffixMatch<'_, '_> {
    /// `stem + replacement`
    pub fn canonical(&self) -> String {
        let mut name = String::with_capacity(self.stem.len() + self.rule.replacement.len());
        name.push_str(self.stem);
        name.push_str(&self.rule.replacement);
        name
    }
}

/// Rewrite rules in priority order (longest pattern first)
#[derive(Debug, Clone)]
pub struct SuffixTable {
    rules: Vec<SuffixRule>,
}

impl SuffixTable {
    /// Validate rules and sort them by descending pattern length
    ///
    /// Equal-length patterns keep declaration order; two distinct patterns of
    /// the same length cannot both end one name, so that order never decides
    /// a match.
    ///
    /// # Errors
    /// Returns [`ConfigError::EmptySuffixPattern`] for an empty pattern and
    /// [`ConfigError::AmbiguousSuffixMatch`] when a pattern appears twice.
    pub fn new<I>(rules: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = SuffixRule>,
    {
        let mut rules: Vec<SuffixRule> = rules.into_iter().collect();

        {
            let mut by_pattern: HashMap<&str, &str> = HashMap::with_capacity(rules.len());
            for rule in &rules {
                if rule.pattern.is_empty() {
                    return Err(ConfigError::EmptySuffixPattern {
                        replacement: rule.replacement.clone(),
                    });
                }
                if let Some(first) = by_pattern.insert(&rule.pattern, &rule.replacement) {
                    return Err(ConfigError::AmbiguousSuffixMatch {
                        pattern: rule.pattern.clone(),
                        first: first.to_string(),
                        second: rule.replacement.clone(),
                    });
                }
            }
        }

        // Stable sort keeps declaration order among equal lengths
        rules.sort_by_key(|rule| Reverse(rule.pattern.len()));

        Ok(Self { rules })
    }

    /// Find the longest rule whose pattern ends `name` and leaves a non-empty stem
    pub fn resolve<'n>(&self, name: &'n str) -> Option<SuffixMatch<'n, '_>> {
        self.rules.iter().find_map(|rule| {
            let stem = name.strip_suffix(rule.pattern.as_str())?;
            (!stem.is_empty()).then_some(SuffixMatch { stem, rule })
        })
    }

    /// Rules in match priority order
    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
