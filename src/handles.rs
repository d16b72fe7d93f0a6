//! Opaque handle classification for registry types

use std::collections::HashSet;

/// Types the emitter must wrap as opaque handles instead of integers
#[derive(Debug, Clone, Default)]
pub struct HandleTypes {
    types: HashSet<String>,
}

impl HandleTypes {
    pub fn new<I: IntoIterator<Item = String>>(types: I) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    /// Check if a raw type name is an opaque handle
    pub fn is_opaque_handle(&self, type_name: &str) -> bool {
        self.types.contains(type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
