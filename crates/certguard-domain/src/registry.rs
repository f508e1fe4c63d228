//! Explicit lint registry.
//!
//! The host builds a registry once (see [`crate::builtin_registry`]) and hands it to the engine.
//! Nothing registers itself behind the caller's back.

use crate::lint::{Lint, LintMetadata};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("lint name must not be empty")]
    EmptyName,
    #[error("lint `{0}` is already registered")]
    Duplicate(String),
}

/// Lints keyed by unique name, iterated in name order.
#[derive(Default)]
pub struct Registry {
    lints: Vec<Box<dyn Lint>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, lint: Box<dyn Lint>) -> Result<(), RegistryError> {
        let name = lint.metadata().name;
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        match self
            .lints
            .binary_search_by(|existing| existing.metadata().name.cmp(name))
        {
            Ok(_) => Err(RegistryError::Duplicate(name.to_string())),
            Err(pos) => {
                self.lints.insert(pos, lint);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Lint> {
        self.lints
            .binary_search_by(|existing| existing.metadata().name.cmp(name))
            .ok()
            .map(|pos| &*self.lints[pos])
    }

    /// All lints, sorted by name.
    pub fn lints(&self) -> &[Box<dyn Lint>] {
        &self.lints
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.metadata().name).collect()
    }

    pub fn metadata(&self) -> Vec<&LintMetadata> {
        self.lints.iter().map(|l| l.metadata()).collect()
    }

    pub fn len(&self) -> usize {
        self.lints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lints.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("lints", &self.names())
            .finish()
    }
}
