// Symbol resolution engine
//
// Stateless transform over (ConfigStore, RawSymbol stream) → resolved symbols:
//
//   functions:  vendor strip → longest-match suffix rewrite → reserved guard
//   enumerants: exclusion check → group memberships → member identifier
//   types:      opaque handle classification
//
// Enum groups are built once, sequentially, before any symbol is resolved.
// Symbols are then resolved independently (optionally across worker threads)
// and concatenated in input order, so a parallel run is byte-identical to a
// sequential one.

mod error;

pub use error::{ResolveError, UnresolvedSymbols};

use crate::config::{ConfigStore, UnmatchedFunctions};
use crate::enum_groups::EnumGroupTable;
use crate::symbol::{RawSymbol, ResolvedGroup, ResolvedSymbol, SymbolKind};
use serde::Serialize;

/// Output of one resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Resolved symbols in input order (excluded enumerants omitted)
    pub symbols: Vec<ResolvedSymbol>,

    /// Augmented enum groups
    pub groups: Vec<ResolvedGroup>,

    /// Per-symbol failures, in input order
    #[serde(skip)]
    pub errors: Vec<ResolveError>,
}

impl Resolution {
    /// True when every symbol resolved
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn collected per-symbol failures into a single error
    pub fn into_result(self) -> Result<Self, UnresolvedSymbols> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            Err(UnresolvedSymbols {
                errors: self.errors,
            })
        }
    }

    pub fn count_kind(&self, kind: SymbolKind) -> usize {
        self.symbols.iter().filter(|s| s.kind == kind).count()
    }
}

/// Resolution engine borrowing a validated configuration
#[derive(Debug, Clone, Copy)]
pub struct Engine<'c> {
    config: &'c ConfigStore,
}

impl<'c> Engine<'c> {
    pub fn new(config: &'c ConfigStore) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'c ConfigStore {
        self.config
    }

    /// Resolve a command name to its canonical wrapper name
    ///
    /// `glGetQueryObjectui64v` → `glGetQueryObject_ui64v`,
    /// `glUniform1fvARB` → `glUniform_1fv_ARB`.
    ///
    /// # Errors
    /// [`ResolveError::UnknownSuffix`] when no suffix rule matches and the
    /// configuration does not allow unmatched functions.
    pub fn resolve_function(&self, raw: &RawSymbol) -> Result<ResolvedSymbol, ResolveError> {
        let split = self.config.vendors().strip(&raw.name, SymbolKind::Function);

        let mut canonical = match self.config.suffixes().resolve(split.base) {
            Some(found) => found.canonical(),
            None => match self.config.unmatched_functions() {
                UnmatchedFunctions::Error => {
                    return Err(ResolveError::UnknownSuffix {
                        raw_name: raw.name.clone(),
                        base: split.base.to_string(),
                    });
                }
                UnmatchedFunctions::Keep => {
                    tracing::trace!("No suffix rule for {}, keeping base", raw.name);
                    split.base.to_string()
                }
            },
        };
        if let Some(tag) = split.tag {
            canonical.push_str(tag);
        }

        let reserved = self.config.reserved();
        let canonical_name = reserved.escape(canonical);
        let params = raw
            .params
            .iter()
            .map(|param| reserved.escape(param.clone()))
            .collect();

        tracing::trace!("{} -> {}", raw.name, canonical_name);

        Ok(ResolvedSymbol {
            raw_name: raw.name.clone(),
            canonical_name,
            vendor_tag: split.tag.map(str::to_string),
            kind: SymbolKind::Function,
            group_memberships: Vec::new(),
            is_opaque_handle: false,
            params,
        })
    }

    /// Resolve an enumerant, or `None` if it is excluded
    ///
    /// The canonical name is the member identifier: prefix removed,
    /// lowercased, vendor tag re-appended, reserved words escaped
    /// (`GL_MIN` → `min_`, `GL_TEXTURE_2D_ARB` → `texture_2d_arb`).
    pub fn resolve_enumerant(
        &self,
        raw: &RawSymbol,
        groups: &EnumGroupTable,
    ) -> Option<ResolvedSymbol> {
        if self.config.is_excluded_enum(&raw.name) {
            tracing::debug!("Skipping excluded enumerant {}", raw.name);
            return None;
        }

        let split = self.config.vendors().strip(&raw.name, SymbolKind::Enumerant);
        let canonical_name = self.member_identifier(split.base, split.tag);

        Some(ResolvedSymbol {
            raw_name: raw.name.clone(),
            canonical_name,
            vendor_tag: split.tag.map(str::to_string),
            kind: SymbolKind::Enumerant,
            group_memberships: groups.memberships(&raw.name).to_vec(),
            is_opaque_handle: false,
            params: Vec::new(),
        })
    }

    /// Classify a type name
    pub fn resolve_type(&self, raw: &RawSymbol) -> ResolvedSymbol {
        ResolvedSymbol {
            raw_name: raw.name.clone(),
            canonical_name: self.config.reserved().escape(raw.name.clone()),
            vendor_tag: None,
            kind: SymbolKind::Type,
            group_memberships: Vec::new(),
            is_opaque_handle: self.config.handles().is_opaque_handle(&raw.name),
            params: Vec::new(),
        }
    }

    /// Dispatch on the symbol kind
    ///
    /// `Ok(None)` means the symbol is intentionally not emitted.
    pub fn resolve_symbol(
        &self,
        raw: &RawSymbol,
        groups: &EnumGroupTable,
    ) -> Result<Option<ResolvedSymbol>, ResolveError> {
        match raw.kind {
            SymbolKind::Function => self.resolve_function(raw).map(Some),
            SymbolKind::Enumerant => Ok(self.resolve_enumerant(raw, groups)),
            SymbolKind::Type => Ok(Some(self.resolve_type(raw))),
        }
    }

    /// Resolve a whole registry stream on the current thread
    pub fn run(&self, symbols: &[RawSymbol]) -> Resolution {
        self.run_with_jobs(symbols, 1)
    }

    /// Resolve a whole registry stream across up to `jobs` worker threads
    ///
    /// The stream is split into contiguous chunks and results are stitched
    /// back in chunk order, so output never depends on worker timing.
    pub fn run_with_jobs(&self, symbols: &[RawSymbol], jobs: usize) -> Resolution {
        let groups = EnumGroupTable::from_symbols(symbols, self.config);

        let outcomes = if jobs <= 1 || symbols.len() < 2 {
            self.resolve_chunk(symbols, &groups)
        } else {
            self.resolve_parallel(symbols, &groups, jobs)
        };

        let mut resolved = Vec::with_capacity(outcomes.len());
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(Some(symbol)) => resolved.push(symbol),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!("{}", err);
                    errors.push(err);
                }
            }
        }

        let resolution = Resolution {
            symbols: resolved,
            groups: groups.resolved_groups(self.config.reserved()),
            errors,
        };

        tracing::info!(
            "Resolved {} symbols ({} functions, {} enumerants, {} types), {} groups, {} unresolved",
            resolution.symbols.len(),
            resolution.count_kind(SymbolKind::Function),
            resolution.count_kind(SymbolKind::Enumerant),
            resolution.count_kind(SymbolKind::Type),
            resolution.groups.len(),
            resolution.errors.len()
        );

        resolution
    }

    fn resolve_chunk(
        &self,
        chunk: &[RawSymbol],
        groups: &EnumGroupTable,
    ) -> Vec<Result<Option<ResolvedSymbol>, ResolveError>> {
        chunk
            .iter()
            .map(|raw| self.resolve_symbol(raw, groups))
            .collect()
    }

    fn resolve_parallel(
        &self,
        symbols: &[RawSymbol],
        groups: &EnumGroupTable,
        jobs: usize,
    ) -> Vec<Result<Option<ResolvedSymbol>, ResolveError>> {
        let chunk_size = symbols.len().div_ceil(jobs);
        tracing::debug!(
            "Resolving {} symbols on {} workers ({} per chunk)",
            symbols.len(),
            jobs,
            chunk_size
        );

        let joined = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = symbols
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move |_| self.resolve_chunk(chunk, groups)))
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect::<Vec<_>>()
        });

        joined.unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    }

    fn member_identifier(&self, base: &str, tag: Option<&str>) -> String {
        let body = base
            .strip_prefix(self.config.enum_prefix())
            .filter(|rest| !rest.is_empty())
            .unwrap_or(base);

        let mut ident = String::with_capacity(body.len() + 8);
        if body.starts_with(|c: char| c.is_ascii_digit()) {
            ident.push('_');
        }
        ident.push_str(&body.to_ascii_lowercase());
        if let Some(tag) = tag {
            ident.push_str(&tag.to_ascii_lowercase());
        }

        self.config.reserved().escape(ident)
    }
}

#[cfg(test)]
mod tests;
