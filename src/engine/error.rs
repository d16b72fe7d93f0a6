use thiserror::Error;

/// Per-symbol resolution failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No function suffix rule matches the vendor-stripped base
    #[error("No function suffix rule matches '{raw_name}' (base '{base}')")]
    UnknownSuffix { raw_name: String, base: String },
}

impl ResolveError {
    pub fn raw_name(&self) -> &str {
        match self {
            ResolveError::UnknownSuffix { raw_name, .. } => raw_name,
        }
    }
}

/// Every per-symbol failure of one pass, reported together
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} symbol(s) could not be resolved", .errors.len())]
pub struct UnresolvedSymbols {
    pub errors: Vec<ResolveError>,
}
