//! Namespace resolver.
//!
//! # Responsibility
//! - Map each namespace onto every contributing search-path directory.
//! - Walk those directories recursively, turning unit files into types.
//!
//! # Invariants
//! - Results are a set; overlapping roots never produce duplicates.
//! - Resolution is all-or-nothing: the first failure aborts the call and
//!   no partial result is returned.
//! - Traversal order does not affect the result.

use crate::discovery::error::ResolutionError;
use crate::loader::Loader;
use crate::model::names::{child_name, is_valid_dotted_name};
use crate::model::type_descriptor::TypeHandle;
use log::{debug, error, info};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Resolves `namespaces` to the set of registered types found under them.
pub fn resolve<I, S>(
    loader: &Loader,
    namespaces: I,
) -> Result<BTreeSet<TypeHandle>, ResolutionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NamespaceResolver::new(loader).resolve(namespaces)
}

/// Directory walker bound to one loader.
pub struct NamespaceResolver<'a> {
    loader: &'a Loader,
}

impl<'a> NamespaceResolver<'a> {
    pub fn new(loader: &'a Loader) -> Self {
        Self { loader }
    }

    pub fn resolve<I, S>(&self, namespaces: I) -> Result<BTreeSet<TypeHandle>, ResolutionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let started_at = Instant::now();
        let mut found = BTreeSet::new();
        let mut namespace_count = 0usize;

        for namespace in namespaces {
            namespace_count += 1;
            if let Err(err) = self.resolve_namespace(namespace.as_ref(), &mut found) {
                error!(
                    "event=namespace_resolve module=discovery status=error namespace={} error_code={} error={}",
                    namespace.as_ref(),
                    err.code(),
                    err
                );
                return Err(err);
            }
        }

        info!(
            "event=namespace_resolve module=discovery status=ok namespaces={} types={} duration_ms={}",
            namespace_count,
            found.len(),
            started_at.elapsed().as_millis()
        );
        Ok(found)
    }

    fn resolve_namespace(
        &self,
        namespace: &str,
        found: &mut BTreeSet<TypeHandle>,
    ) -> Result<(), ResolutionError> {
        if !is_valid_dotted_name(namespace) {
            return Err(ResolutionError::MalformedNamespace(namespace.to_string()));
        }

        let dirs = self.loader.search_path().roots_for(namespace)?;
        debug!(
            "event=namespace_roots module=discovery status=ok namespace={} roots={}",
            namespace,
            dirs.len()
        );
        for dir in dirs {
            self.scan_dir(namespace, &dir, found)?;
        }
        Ok(())
    }

    fn scan_dir(
        &self,
        namespace: &str,
        dir: &Path,
        found: &mut BTreeSet<TypeHandle>,
    ) -> Result<(), ResolutionError> {
        let entries = fs::read_dir(dir).map_err(|err| ResolutionError::io(dir, err))?;
        let search_path = self.loader.search_path();

        for entry in entries {
            let entry = entry.map_err(|err| ResolutionError::io(dir, err))?;
            let path = entry.path();
            let metadata = fs::metadata(&path).map_err(|err| ResolutionError::io(&path, err))?;

            if metadata.is_dir() {
                // Non-segment names are still walked; units below them fail in `load_unit`.
                let segment = entry.file_name().to_string_lossy().into_owned();
                self.scan_dir(&child_name(namespace, &segment), &path, found)?;
            } else if metadata.is_file() && search_path.is_unit_file(&path) {
                let handle = self.load_unit(namespace, &path)?;
                found.insert(handle);
            }
        }
        Ok(())
    }

    fn load_unit(&self, namespace: &str, path: &Path) -> Result<TypeHandle, ResolutionError> {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy())
            .unwrap_or_default();
        let name = child_name(namespace, &stem);
        if !is_valid_dotted_name(&name) {
            return Err(ResolutionError::InvalidUnitName(path.to_path_buf()));
        }

        self.loader
            .registry()
            .get(&name)
            .ok_or_else(|| ResolutionError::UnregisteredType {
                name,
                path: path.to_path_buf(),
            })
    }
}
