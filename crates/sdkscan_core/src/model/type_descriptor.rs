//! Explicit type metadata used in place of runtime introspection.
//!
//! # Responsibility
//! - Describe a discoverable type: name, kind, direct capability
//!   declarations and single parent link.
//! - Provide a cheap, shareable handle with name-based identity.
//!
//! # Invariants
//! - Two handles are equal iff their fully-qualified names are equal.
//! - A parent link always points to an already built descriptor, so
//!   ancestor chains are finite and acyclic.

use crate::model::capability::ExtensionCapability;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Instantiability of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Instantiable implementation.
    Concrete,
    /// Partial implementation meant to be extended.
    Abstract,
    /// Declaration-only contract.
    Interface,
}

/// Metadata for one registered type.
#[derive(Debug)]
pub struct TypeDescriptor {
    name: String,
    kind: TypeKind,
    declared_capabilities: BTreeSet<ExtensionCapability>,
    parent: Option<TypeHandle>,
}

impl TypeDescriptor {
    /// Fully-qualified type name, e.g. `com.acme.ext.AddAuditColumn`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Capabilities declared directly on this type (not inherited).
    pub fn declared_capabilities(&self) -> &BTreeSet<ExtensionCapability> {
        &self.declared_capabilities
    }

    /// Immediate ancestor, `None` at the root of a hierarchy.
    pub fn parent(&self) -> Option<&TypeHandle> {
        self.parent.as_ref()
    }

    /// Returns whether this type can be instantiated.
    pub fn is_concrete(&self) -> bool {
        self.kind == TypeKind::Concrete
    }

    /// Returns whether `capability` is declared directly on this type.
    pub fn declares(&self, capability: ExtensionCapability) -> bool {
        self.declared_capabilities.contains(&capability)
    }
}

/// Shared handle to a [`TypeDescriptor`].
#[derive(Debug, Clone)]
pub struct TypeHandle(Arc<TypeDescriptor>);

impl TypeHandle {
    /// Starts a concrete type declaration.
    pub fn concrete(name: impl Into<String>) -> TypeBuilder {
        TypeBuilder::new(name, TypeKind::Concrete)
    }

    /// Starts an abstract type declaration.
    pub fn abstract_type(name: impl Into<String>) -> TypeBuilder {
        TypeBuilder::new(name, TypeKind::Abstract)
    }

    /// Starts an interface declaration.
    pub fn interface(name: impl Into<String>) -> TypeBuilder {
        TypeBuilder::new(name, TypeKind::Interface)
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.0
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn kind(&self) -> TypeKind {
        self.0.kind()
    }

    pub fn parent(&self) -> Option<&TypeHandle> {
        self.0.parent()
    }

    pub fn is_concrete(&self) -> bool {
        self.0.is_concrete()
    }

    /// Iterates this type followed by its ancestors, nearest first.
    pub fn lineage(&self) -> Lineage<'_> {
        Lineage { next: Some(self) }
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for TypeHandle {}

impl PartialOrd for TypeHandle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeHandle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl Hash for TypeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl Display for TypeHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TypeHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Iterator over a type and its ancestors.
pub struct Lineage<'a> {
    next: Option<&'a TypeHandle>,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = &'a TypeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

/// Builder for [`TypeHandle`] declarations.
#[derive(Debug)]
pub struct TypeBuilder {
    name: String,
    kind: TypeKind,
    declared_capabilities: BTreeSet<ExtensionCapability>,
    parent: Option<TypeHandle>,
}

impl TypeBuilder {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            declared_capabilities: BTreeSet::new(),
            parent: None,
        }
    }

    /// Declares direct conformance to `capability`.
    pub fn implements(mut self, capability: ExtensionCapability) -> Self {
        self.declared_capabilities.insert(capability);
        self
    }

    /// Sets the immediate ancestor.
    pub fn extends(mut self, parent: &TypeHandle) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    pub fn build(self) -> TypeHandle {
        TypeHandle(Arc::new(TypeDescriptor {
            name: self.name,
            kind: self.kind,
            declared_capabilities: self.declared_capabilities,
            parent: self.parent,
        }))
    }
}
