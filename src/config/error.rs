use thiserror::Error;

/// Configuration defects detected once, at load time
///
/// Any of these aborts the whole run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration TOML: {0}")]
    Parse(String),

    #[error("Empty entry in extension_suffixes")]
    EmptyVendorSuffix,

    #[error("Duplicate vendor suffix '{0}' in extension_suffixes")]
    DuplicateVendorSuffix(String),

    #[error("Ambiguous vendor suffixes: '{shorter}' is a trailing substring of '{longer}'")]
    AmbiguousVendorSuffix { shorter: String, longer: String },

    #[error("Empty pattern in function_suffixes (replacement '{replacement}')")]
    EmptySuffixPattern { replacement: String },

    #[error(
        "Ambiguous function suffix rules: pattern '{pattern}' maps to both '{first}' and '{second}'"
    )]
    AmbiguousSuffixMatch {
        pattern: String,
        first: String,
        second: String,
    },

    #[error("reserved_escape must not be empty")]
    EmptyReservedEscape,

    #[error("Reserved name '{name}' escapes to '{escaped}', which is also reserved")]
    ReservedNameCollisionUnresolved { name: String, escaped: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
