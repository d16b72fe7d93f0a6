//! Vendor/extension suffix stripping
//!
//! Enumerants carry the tag with its separator (`GL_TEXTURE_2D_ARB`), camel-case
//! commands carry it bare (`glBindBufferARB`). Matching is exact, anchored at
//! the end of the name, and always leaves a non-empty base.

use crate::config::ConfigError;
use crate::symbol::SymbolKind;
use std::collections::HashSet;

/// Raw name split into its base and the stripped vendor tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorSplit<'n, 't> {
    pub base: &'n str,
    /// Tag in its configured spelling (e.g. `_ARB`), even when matched bare
    pub tag: Option<&'t str>,
}

/// Ordered, validated `extension_suffixes` table
#[derive(Debug, Clone)]
pub struct VendorSuffixes {
    tags: Vec<String>,
}

impl VendorSuffixes {
    /// Validate and build the table
    ///
    /// # Errors
    /// Rejects empty or duplicate tags, and any tag that is a trailing
    /// substring of another (in either the separated or the bare spelling),
    /// since first-match-wins would then depend on table order.
    pub fn new(tags: Vec<String>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for tag in &tags {
            if bare(tag).is_empty() {
                return Err(ConfigError::EmptyVendorSuffix);
            }
            if !seen.insert(tag.as_str()) {
                return Err(ConfigError::DuplicateVendorSuffix(tag.clone()));
            }
        }

        for shorter in &tags {
            for longer in &tags {
                if shorter == longer {
                    continue;
                }
                if longer.ends_with(shorter.as_str()) || bare(longer).ends_with(bare(shorter)) {
                    return Err(ConfigError::AmbiguousVendorSuffix {
                        shorter: shorter.clone(),
                        longer: longer.clone(),
                    });
                }
            }
        }

        Ok(Self { tags })
    }

    /// Strip a trailing vendor tag from `raw`
    ///
    /// Functions also match the tag without its leading underscore.
    pub fn strip<'n>(&self, raw: &'n str, kind: SymbolKind) -> VendorSplit<'n, '_> {
        for tag in &self.tags {
            if let Some(base) = strip_nonempty(raw, tag) {
                return VendorSplit {
                    base,
                    tag: Some(tag),
                };
            }
            if kind == SymbolKind::Function {
                if let Some(base) = strip_nonempty(raw, bare(tag)) {
                    return VendorSplit {
                        base,
                        tag: Some(tag),
                    };
                }
            }
        }

        VendorSplit {
            base: raw,
            tag: None,
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn bare(tag: &str) -> &str {
    tag.trim_start_matches('_')
}

fn strip_nonempty<'n>(raw: &'n str, tag: &str) -> Option<&'n str> {
    raw.strip_suffix(tag).filter(|base| !base.is_empty())
}
