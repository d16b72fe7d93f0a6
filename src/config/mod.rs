// Configuration store for symbol normalization
//
// The curated tables (vendor tags, reserved words, suffix rewrites, handle
// types, excluded enums, extra enum groups) live in TOML. The desktop GL set is
// embedded from config-default.toml; a file passed at startup replaces it.
//
// Every table is validated when the store is built. Ambiguous tables abort the
// run before a single symbol is resolved.

mod error;
mod store;

pub use error::ConfigError;
pub use store::{ConfigStore, ConfigTables, UnmatchedFunctions};
