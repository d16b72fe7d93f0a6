//! Raw registry symbols and their resolved form
//!
//! A [`RawSymbol`] is what the registry reader hands over; a [`ResolvedSymbol`]
//! is what the code emitter receives. Resolution never edits the raw record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// Command / entry point (e.g. `glTexParameteriv`)
    Function,
    /// Enumerant (e.g. `GL_NEAREST`)
    Enumerant,
    /// Type name (e.g. `GLsync`)
    Type,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SymbolKind::Function => "function",
            SymbolKind::Enumerant => "enumerant",
            SymbolKind::Type => "type",
        };
        f.write_str(label)
    }
}

/// Symbol descriptor as supplied by the registry reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSymbol {
    /// Identifier exactly as it appears in the registry
    pub name: String,

    pub kind: SymbolKind,

    /// Registry-declared groups (enumerants only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,

    /// Parameter names (functions only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

impl RawSymbol {
    pub fn function<S: Into<String>>(name: S, params: &[&str]) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Function,
            groups: Vec::new(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn enumerant<S: Into<String>>(name: S, groups: &[&str]) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Enumerant,
            groups: groups.iter().map(|g| g.to_string()).collect(),
            params: Vec::new(),
        }
    }

    pub fn type_name<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Type,
            groups: Vec::new(),
            params: Vec::new(),
        }
    }
}

/// Resolved descriptor handed to the code emitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSymbol {
    /// Registry name the record was derived from
    pub raw_name: String,

    /// Normalized identifier the generated bindings expose
    pub canonical_name: String,

    /// Vendor/extension tag stripped from the raw name, in its configured spelling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_tag: Option<String>,

    pub kind: SymbolKind,

    /// Final groups containing this enumerant, in group order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_memberships: Vec<String>,

    /// Type must be emitted as an opaque handle rather than an integer
    #[serde(default)]
    pub is_opaque_handle: bool,

    /// Parameter names after reserved-word escaping (functions only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

/// Enum group after augmentation and exclusion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGroup {
    /// Group name verbatim from the registry or the extra-groups table
    pub name: String,

    /// Group name after reserved-word escaping
    pub identifier: String,

    /// Deduplicated members: registry order first, then extra-table order
    pub members: Vec<String>,
}
