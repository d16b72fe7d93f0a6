//! Enum group augmentation
//!
//! The registry's own enum→group associations are incomplete for binding
//! purposes (e.g. no `TextureMagFilter` group), so the curated
//! `extra_enum_groups` table is merged on top:
//!
//! - members: registry declaration order first, then extra members not
//!   already present, in table order
//! - groups: registry groups in order of first appearance, then extra-only
//!   groups in table order
//! - excluded enumerants are dropped from every group regardless of source

use crate::config::ConfigStore;
use crate::reserved::ReservedGuard;
use crate::symbol::{RawSymbol, ResolvedGroup, SymbolKind};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Final, deduplicated enum groups plus a member → groups index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumGroupTable {
    groups: IndexMap<String, IndexSet<String>>,
    memberships: HashMap<String, Vec<String>>,
}

impl EnumGroupTable {
    /// Merge registry `(group, member)` pairs with the configured extra groups
    ///
    /// Pairs must arrive in registry declaration order.
    pub fn augment<'a, I>(declared: I, config: &ConfigStore) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut groups: IndexMap<String, IndexSet<String>> = IndexMap::new();

        for (group, member) in declared {
            if config.is_excluded_enum(member) {
                tracing::debug!("Dropping excluded enumerant {} from group {}", member, group);
                continue;
            }
            groups
                .entry(group.to_string())
                .or_default()
                .insert(member.to_string());
        }

        for (group, members) in config.extra_enum_groups() {
            let entry = groups.entry(group.clone()).or_default();
            for member in members {
                if config.is_excluded_enum(member) {
                    tracing::debug!("Dropping excluded enumerant {} from group {}", member, group);
                    continue;
                }
                entry.insert(member.clone());
            }
        }

        groups.retain(|_, members| !members.is_empty());

        let mut memberships: HashMap<String, Vec<String>> = HashMap::new();
        for (group, members) in &groups {
            for member in members {
                memberships
                    .entry(member.clone())
                    .or_default()
                    .push(group.clone());
            }
        }

        Self {
            groups,
            memberships,
        }
    }

    /// Collect registry associations from a symbol stream and augment them
    pub fn from_symbols(symbols: &[RawSymbol], config: &ConfigStore) -> Self {
        let declared = symbols
            .iter()
            .filter(|sym| sym.kind == SymbolKind::Enumerant)
            .flat_map(|sym| {
                sym.groups
                    .iter()
                    .map(move |group| (group.as_str(), sym.name.as_str()))
            });

        Self::augment(declared, config)
    }

    /// Groups containing `enumerant`, in group order
    pub fn memberships(&self, enumerant: &str) -> &[String] {
        self.memberships
            .get(enumerant)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn members(&self, group: &str) -> Option<&IndexSet<String>> {
        self.groups.get(group)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Output records, with group identifiers escaped against reserved words
    pub fn resolved_groups(&self, reserved: &ReservedGuard) -> Vec<ResolvedGroup> {
        self.groups
            .iter()
            .map(|(name, members)| ResolvedGroup {
                name: name.clone(),
                identifier: reserved.escape(name.clone()),
                members: members.iter().cloned().collect(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
