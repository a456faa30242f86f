//! Discovery context: the published result of one discovery pass.
//!
//! # Responsibility
//! - Run resolution + classification for a namespace set.
//! - Publish the discovered set and capability index atomically.
//! - Expose read-only queries over the published snapshot.
//!
//! # Invariants
//! - A snapshot is built locally and assigned in one step; a failed pass
//!   leaves the previous state untouched.
//! - An uninitialized context answers every query with empty collections.
//!
//! # See also
//! - `context::global` for the process-wide accessor.

use crate::config::{packages_from, properties_file_name, Properties};
use crate::discovery::{classify, CapabilityIndex, NamespaceResolver};
use crate::loader::Loader;
use crate::model::capability::ExtensionCapability;
use crate::model::type_descriptor::TypeHandle;
use log::{debug, error, info};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::time::Instant;

mod error;
pub mod global;

pub use error::{ConfigError, SdkError};

/// Immutable result of one successful discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscoverySnapshot {
    /// Namespaces the pass was run against.
    pub packages: BTreeSet<String>,
    /// Every resolved type, including abstract and unrelated ones.
    pub all_types: BTreeSet<TypeHandle>,
    /// Concrete types grouped by capability.
    pub extension_types: CapabilityIndex,
}

impl DiscoverySnapshot {
    /// Runs resolution and classification without touching any context.
    pub fn build(loader: &Loader, packages: BTreeSet<String>) -> Result<Self, SdkError> {
        let all_types = NamespaceResolver::new(loader).resolve(&packages)?;
        let extension_types = classify(&all_types);
        Ok(Self {
            packages,
            all_types,
            extension_types,
        })
    }
}

/// Explicitly constructed discovery context.
#[derive(Debug)]
pub struct SdkContext {
    loader: Loader,
    initialized: bool,
    snapshot: DiscoverySnapshot,
}

impl SdkContext {
    /// Creates an uninitialized context bound to `loader`.
    pub fn new(loader: Loader) -> Self {
        Self {
            loader,
            initialized: false,
            snapshot: DiscoverySnapshot::default(),
        }
    }

    /// Runs discovery for `packages` and publishes the result.
    ///
    /// # Errors
    /// - `SdkError::Unexpected` wrapping the first resolution failure. The
    ///   context keeps whatever state it had before the call.
    pub fn init<I, S>(&mut self, packages: I) -> Result<(), SdkError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let started_at = Instant::now();
        let packages: BTreeSet<String> =
            packages.into_iter().map(Into::<String>::into).collect();
        info!(
            "event=discovery_init module=context status=start packages={}",
            packages.len()
        );

        let snapshot = match DiscoverySnapshot::build(&self.loader, packages) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!(
                    "event=discovery_init module=context status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        };

        info!(
            "event=discovery_init module=context status=ok packages={} types={} extensions={} duration_ms={}",
            snapshot.packages.len(),
            snapshot.all_types.len(),
            snapshot.extension_types.total_types(),
            started_at.elapsed().as_millis()
        );
        self.snapshot = snapshot;
        self.initialized = true;
        Ok(())
    }

    /// Initializes from a properties payload.
    ///
    /// `None`, or a payload without a non-blank `packages` key, leaves the
    /// context uninitialized and is not an error.
    pub fn init_from_properties<R: Read>(
        &mut self,
        payload: Option<R>,
    ) -> Result<(), ConfigError> {
        let Some(reader) = payload else {
            debug!("event=config_load module=context status=skip reason=no_payload");
            return Ok(());
        };

        let properties = Properties::load(reader)?;
        let Some(packages) = packages_from(&properties) else {
            debug!("event=config_load module=context status=skip reason=no_packages");
            return Ok(());
        };

        self.init(packages)?;
        Ok(())
    }

    /// Initializes from the properties resource found on the search path.
    ///
    /// The resource name comes from [`properties_file_name`].
    pub fn init_from_search_path(&mut self) -> Result<(), ConfigError> {
        let resource = properties_file_name();
        let payload = match self.loader.search_path().find_resource(&resource) {
            Some(path) => {
                debug!(
                    "event=config_load module=context status=start path={}",
                    path.display()
                );
                Some(File::open(&path)?)
            }
            None => None,
        };
        self.init_from_properties(payload)
    }

    /// Discards the published snapshot.
    pub fn reset(&mut self) {
        self.initialized = false;
        self.snapshot = DiscoverySnapshot::default();
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Namespaces of the last successful pass.
    pub fn packages(&self) -> &BTreeSet<String> {
        &self.snapshot.packages
    }

    pub fn all_types(&self) -> &BTreeSet<TypeHandle> {
        &self.snapshot.all_types
    }

    pub fn extension_types(&self) -> &CapabilityIndex {
        &self.snapshot.extension_types
    }

    /// Implementations of one capability; empty when there are none.
    pub fn types_for(&self, capability: ExtensionCapability) -> Vec<TypeHandle> {
        self.snapshot
            .extension_types
            .get(capability)
            .map(|types| types.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> &DiscoverySnapshot {
        &self.snapshot
    }
}
