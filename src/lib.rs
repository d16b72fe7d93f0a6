//! glnorm - GL registry symbol normalization
//!
//! This library turns raw GL registry names into the canonical identifiers a
//! binding generator emits: vendor tags are split off, function type suffixes
//! are rewritten by longest match, reserved words are escaped, enum groups are
//! augmented from curated tables, and opaque handle types are flagged.

pub mod cli;
pub mod config;
pub mod engine;
pub mod enum_groups;
pub mod handles;
pub mod output;
pub mod registry_dump;
pub mod reserved;
pub mod suffix;
pub mod symbol;
pub mod vendor;

pub use config::{ConfigError, ConfigStore};
pub use engine::{Engine, Resolution, ResolveError};
pub use symbol::{RawSymbol, ResolvedGroup, ResolvedSymbol, SymbolKind};
