//! Output writers for resolved symbols
//!
//! Text: one line per symbol, followed by the resolved groups.
//! JSON: `glnorm-json-v1` document with a summary block.
//!
//! The JSON rendering carries no timestamps or tool version, so its SHA-256
//! fingerprint only changes when the resolution itself changes.

use crate::engine::Resolution;
use crate::symbol::{ResolvedGroup, ResolvedSymbol, SymbolKind};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// Summary counts for a resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JsonSummary {
    pub total_symbols: usize,
    pub functions: usize,
    pub enumerants: usize,
    pub types: usize,
    pub opaque_handles: usize,
    pub groups: usize,
}

/// Complete JSON document
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'r> {
    /// Format version identifier
    pub format: &'static str,
    pub summary: JsonSummary,
    pub symbols: &'r [ResolvedSymbol],
    pub groups: &'r [ResolvedGroup],
}

impl<'r> JsonOutput<'r> {
    pub fn new(resolution: &'r Resolution) -> Self {
        let summary = JsonSummary {
            total_symbols: resolution.symbols.len(),
            functions: resolution.count_kind(SymbolKind::Function),
            enumerants: resolution.count_kind(SymbolKind::Enumerant),
            types: resolution.count_kind(SymbolKind::Type),
            opaque_handles: resolution
                .symbols
                .iter()
                .filter(|s| s.is_opaque_handle)
                .count(),
            groups: resolution.groups.len(),
        };

        Self {
            format: "glnorm-json-v1",
            summary,
            symbols: &resolution.symbols,
            groups: &resolution.groups,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render a resolution as plain text
pub fn render_text(resolution: &Resolution) -> String {
    let mut out = String::new();

    let width = resolution
        .symbols
        .iter()
        .map(|s| s.raw_name.len())
        .max()
        .unwrap_or(0);

    for symbol in &resolution.symbols {
        let _ = write!(
            out,
            "{:<9} {:<width$} -> {}",
            symbol.kind.to_string(),
            symbol.raw_name,
            symbol.canonical_name,
            width = width
        );
        if !symbol.group_memberships.is_empty() {
            let _ = write!(out, " [{}]", symbol.group_memberships.join(", "));
        }
        if symbol.is_opaque_handle {
            out.push_str(" (opaque handle)");
        }
        out.push('\n');
    }

    if !resolution.groups.is_empty() {
        out.push('\n');
        for group in &resolution.groups {
            let _ = writeln!(
                out,
                "group {} ({}): {}",
                group.name,
                group.identifier,
                group.members.join(", ")
            );
        }
    }

    out
}

/// Hex SHA-256 of a rendered document
pub fn fingerprint(rendered: &str) -> String {
    hex::encode(Sha256::digest(rendered.as_bytes()))
}
