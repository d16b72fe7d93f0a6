use crate::config::ConfigError;
use crate::handles::HandleTypes;
use crate::reserved::ReservedGuard;
use crate::suffix::{SuffixRule, SuffixTable};
use crate::vendor::VendorSuffixes;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Desktop GL tables compiled into the binary
const DEFAULT_TOML: &str = include_str!("../../config-default.toml");

/// What to do with a function whose tail matches no suffix rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedFunctions {
    /// Report `UnknownSuffix` for the symbol
    #[default]
    Error,
    /// Keep the vendor-stripped base as the canonical body
    Keep,
}

/// Raw configuration tables as written in TOML
///
/// # Example TOML
/// ```toml
/// extension_suffixes = ["_ARB", "_EXT"]
/// reserved_names = ["min", "max"]
/// handle_types = ["GLsync"]
/// excluded_enums = ["GL_INVALID_INDEX"]
///
/// [function_suffixes]
/// "2x3fv" = "_2x3_fv"
/// "fv" = "_fv"
///
/// [extra_enum_groups]
/// TextureMagFilter = ["GL_NEAREST", "GL_LINEAR"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigTables {
    /// Prefix removed from enumerants when forming member identifiers
    #[serde(default = "default_enum_prefix")]
    pub enum_prefix: String,

    /// Appended to identifiers that collide with a reserved word
    #[serde(default = "default_reserved_escape")]
    pub reserved_escape: String,

    #[serde(default)]
    pub unmatched_functions: UnmatchedFunctions,

    /// Vendor tags, matched in this order
    pub extension_suffixes: Vec<String>,

    pub reserved_names: Vec<String>,

    #[serde(default)]
    pub handle_types: Vec<String>,

    #[serde(default)]
    pub excluded_enums: Vec<String>,

    /// Pattern → replacement, in declaration order
    pub function_suffixes: IndexMap<String, String>,

    /// Group name → curated members, in declaration order
    #[serde(default)]
    pub extra_enum_groups: IndexMap<String, Vec<String>>,
}

fn default_enum_prefix() -> String {
    "GL_".to_string()
}

fn default_reserved_escape() -> String {
    "_".to_string()
}

impl ConfigTables {
    /// Parse tables from a TOML document without validating them
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Embedded desktop GL tables
    pub fn default_gl() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEFAULT_TOML)
    }
}

/// Validated, immutable configuration shared by every resolution pass
///
/// Built once at startup and passed by reference; several stores (one per GL
/// profile, say) can be used side by side.
///
/// # Example Usage
/// ```
/// use glnorm::config::ConfigStore;
///
/// let config = ConfigStore::default_gl()?;
/// assert!(config.handles().is_opaque_handle("GLsync"));
/// assert!(config.is_excluded_enum("GL_INVALID_INDEX"));
/// # Ok::<(), glnorm::config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    enum_prefix: String,
    unmatched_functions: UnmatchedFunctions,
    vendors: VendorSuffixes,
    suffixes: SuffixTable,
    reserved: ReservedGuard,
    handles: HandleTypes,
    excluded_enums: HashSet<String>,
    extra_enum_groups: IndexMap<String, Vec<String>>,
}

impl ConfigStore {
    /// Validate raw tables and build the store
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found: ambiguous or empty vendor
    /// tags, duplicate or empty suffix patterns, or a self-colliding reserved
    /// escape.
    pub fn from_tables(tables: ConfigTables) -> Result<Self, ConfigError> {
        let vendors = VendorSuffixes::new(tables.extension_suffixes)?;
        let suffixes = SuffixTable::new(
            tables
                .function_suffixes
                .into_iter()
                .map(|(pattern, replacement)| SuffixRule::new(pattern, replacement)),
        )?;
        let reserved = ReservedGuard::new(tables.reserved_names, tables.reserved_escape)?;

        tracing::debug!(
            "Loaded config: {} vendor tags, {} suffix rules, {} reserved names, {} extra enum groups",
            vendors.len(),
            suffixes.len(),
            reserved.len(),
            tables.extra_enum_groups.len()
        );

        Ok(Self {
            enum_prefix: tables.enum_prefix,
            unmatched_functions: tables.unmatched_functions,
            vendors,
            suffixes,
            reserved,
            handles: HandleTypes::new(tables.handle_types),
            excluded_enums: tables.excluded_enums.into_iter().collect(),
            extra_enum_groups: tables.extra_enum_groups,
        })
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_tables(ConfigTables::from_toml_str(content)?)
    }

    /// Load and validate a TOML configuration file
    ///
    /// # Errors
    /// Returns error if the file can't be read, has invalid TOML syntax, or
    /// fails table validation.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Embedded desktop GL configuration
    pub fn default_gl() -> Result<Self, ConfigError> {
        Self::from_tables(ConfigTables::default_gl()?)
    }

    pub fn enum_prefix(&self) -> &str {
        &self.enum_prefix
    }

    pub fn unmatched_functions(&self) -> UnmatchedFunctions {
        self.unmatched_functions
    }

    pub fn vendors(&self) -> &VendorSuffixes {
        &self.vendors
    }

    pub fn suffixes(&self) -> &SuffixTable {
        &self.suffixes
    }

    pub fn reserved(&self) -> &ReservedGuard {
        &self.reserved
    }

    pub fn handles(&self) -> &HandleTypes {
        &self.handles
    }

    pub fn is_excluded_enum(&self, name: &str) -> bool {
        self.excluded_enums.contains(name)
    }

    pub fn extra_enum_groups(&self) -> &IndexMap<String, Vec<String>> {
        &self.extra_enum_groups
    }
}
