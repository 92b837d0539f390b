//! Routine name resolution
//!
//! The tracer does not own routine identity. It asks an external catalog for
//! a display name at callback time and uses the result only for the current
//! log line.

use crate::exec::RoutineId;
use std::collections::HashMap;

/// Maps an opaque routine identifier to a display name
///
/// The returned name is borrowed from the resolver's own storage and must not
/// be retained past the current callback.
pub trait NameResolver: Send + Sync {
    /// Returns the routine's name, or `None` if the identifier is unknown
    fn resolve(&self, id: RoutineId) -> Option<&str>;
}

/// In-memory catalog of routine names
///
/// For embedders that know their routine set up front, and for tests.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    names: HashMap<RoutineId, String>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: RoutineId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameResolver for StaticCatalog {
    fn resolve(&self, id: RoutineId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }
}
