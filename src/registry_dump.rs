// Registry dump loading
//
// The generator's registry reader flattens the upstream registry into a
// versioned JSON dump; this module reads that dump back into a RawSymbol
// stream. The upstream XML format itself is not handled here.

use crate::symbol::{RawSymbol, SymbolKind};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Dump format version (currently only v1 supported)
pub const SUPPORTED_VERSION: u32 = 1;

/// Malformed registry dump
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid registry dump JSON: {0}")]
    Json(String),

    #[error("Unsupported registry dump version: {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Invalid registry dump: symbol #{index} has an empty name")]
    EmptyName { index: usize },
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Json(err.to_string())
    }
}

/// Registry dump file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDump {
    /// Dump format version
    pub version: u32,

    /// Optional label for the API/profile the dump was taken from (e.g. "gl-4.6-core")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,

    /// Symbols in registry declaration order
    pub symbols: Vec<RawSymbol>,
}

impl RegistryDump {
    /// Load and validate a registry dump from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            bail!("Registry dump not found: {}", path_ref.display());
        }

        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read registry dump: {}", path_ref.display()))?;

        let dump = Self::from_json(&contents)
            .with_context(|| format!("Failed to load registry dump {}", path_ref.display()))?;

        tracing::debug!(
            "Loaded {} registry symbols from {}",
            dump.symbols.len(),
            path_ref.display()
        );
        Ok(dump)
    }

    /// Parse and validate a registry dump from a JSON string
    pub fn from_json(contents: &str) -> Result<Self, RegistryError> {
        let dump: RegistryDump = serde_json::from_str(contents)?;

        if dump.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                found: dump.version,
                expected: SUPPORTED_VERSION,
            });
        }

        if let Some(index) = dump.symbols.iter().position(|s| s.name.is_empty()) {
            return Err(RegistryError::EmptyName { index });
        }

        Ok(dump)
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn count_kind(&self, kind: SymbolKind) -> usize {
        self.symbols.iter().filter(|s| s.kind == kind).count()
    }
}
