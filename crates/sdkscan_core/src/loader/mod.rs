//! Resolution environment: where units live and what their names mean.
//!
//! # Responsibility
//! - Hold the search path that namespaces are mapped onto.
//! - Hold the registry that turns discovered names into typed handles.
//!
//! # Invariants
//! - A `Loader` is immutable once handed to a context; cloning is cheap.

use std::sync::Arc;

pub mod registry;
pub mod search_path;

pub use registry::{RegistryError, TypeRegistry};
pub use search_path::{SearchPath, DEFAULT_UNIT_EXTENSION, SEARCH_PATH_ENV};

/// Search path plus type registry.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    inner: Arc<LoaderInner>,
}

#[derive(Debug, Default)]
struct LoaderInner {
    search_path: SearchPath,
    registry: TypeRegistry,
}

impl Loader {
    pub fn new(search_path: SearchPath, registry: TypeRegistry) -> Self {
        Self {
            inner: Arc::new(LoaderInner {
                search_path,
                registry,
            }),
        }
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.inner.search_path
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.inner.registry
    }
}
