//! Reserved-word escaping for generated identifiers

use crate::config::ConfigError;
use std::collections::HashSet;

/// Case-sensitive reserved-word set plus its escape suffix
#[derive(Debug, Clone)]
pub struct ReservedGuard {
    names: HashSet<String>,
    escape: String,
}

impl ReservedGuard {
    /// # Errors
    /// Fails on an empty escape, or when escaping a reserved word once yields
    /// another reserved word (`int` and `int_` both reserved).
    pub fn new<I, S>(names: I, escape: S) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        S: Into<String>,
    {
        let escape = escape.into();
        if escape.is_empty() {
            return Err(ConfigError::EmptyReservedEscape);
        }

        let names: HashSet<String> = names.into_iter().collect();

        // Sorted so the reported collision does not depend on hash order
        let mut sorted: Vec<&String> = names.iter().collect();
        sorted.sort();
        for name in sorted {
            let escaped = format!("{}{}", name, escape);
            if names.contains(&escaped) {
                return Err(ConfigError::ReservedNameCollisionUnresolved {
                    name: name.clone(),
                    escaped,
                });
            }
        }

        Ok(Self { names, escape })
    }

    pub fn is_reserved(&self, ident: &str) -> bool {
        self.names.contains(ident)
    }

    /// Append the escape until `ident` no longer equals a reserved word
    ///
    /// Non-colliding names come back untouched, so escaping is idempotent.
    pub fn escape(&self, mut ident: String) -> String {
        while self.names.contains(&ident) {
            ident.push_str(&self.escape);
        }
        ident
    }

    pub fn escape_suffix(&self) -> &str {
        &self.escape
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
