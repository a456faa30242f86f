//! Extension classifier and capability index.
//!
//! # Responsibility
//! - Keep only concrete types.
//! - Assign each one at most one capability by walking its ancestor chain.
//!
//! # Invariants
//! - Abstract and interface types never reach the index.
//! - A type lands in exactly one bucket or none: at each level only the
//!   direct declarations are checked, in `ExtensionCapability::ALL` order,
//!   and the first match wins.

use crate::model::capability::ExtensionCapability;
use crate::model::type_descriptor::TypeHandle;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Capability to implementing concrete types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CapabilityIndex {
    buckets: BTreeMap<ExtensionCapability, BTreeSet<TypeHandle>>,
}

impl CapabilityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `handle` under `capability`, creating the bucket on first use.
    pub fn insert(&mut self, capability: ExtensionCapability, handle: TypeHandle) -> bool {
        self.buckets.entry(capability).or_default().insert(handle)
    }

    /// Returns implementing types, `None` when nothing implements `capability`.
    pub fn get(&self, capability: ExtensionCapability) -> Option<&BTreeSet<TypeHandle>> {
        self.buckets.get(&capability)
    }

    pub fn contains(&self, capability: ExtensionCapability, type_name: &str) -> bool {
        self.get(capability)
            .is_some_and(|types| types.iter().any(|handle| handle.name() == type_name))
    }

    /// Capabilities with at least one implementation.
    pub fn capabilities(&self) -> impl Iterator<Item = ExtensionCapability> + '_ {
        self.buckets.keys().copied()
    }

    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (ExtensionCapability, &BTreeSet<TypeHandle>)> + '_ {
        self.buckets.iter().map(|(capability, types)| (*capability, types))
    }

    /// Number of non-empty buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of indexed types across all buckets.
    pub fn total_types(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }
}

/// Builds the capability index for `types`.
pub fn classify<'a, I>(types: I) -> CapabilityIndex
where
    I: IntoIterator<Item = &'a TypeHandle>,
{
    let mut index = CapabilityIndex::new();
    for handle in types {
        if !handle.is_concrete() {
            continue;
        }
        if let Some(capability) = extension_capability(handle) {
            index.insert(capability, handle.clone());
        }
    }
    index
}

/// Returns the first recognized capability on `handle` or its ancestors.
pub fn extension_capability(handle: &TypeHandle) -> Option<ExtensionCapability> {
    handle.lineage().find_map(|level| {
        ExtensionCapability::ALL
            .into_iter()
            .find(|capability| level.descriptor().declares(*capability))
    })
}
