//! Ordered root directories that namespaces are mapped onto.
//!
//! # Invariants
//! - Namespace `a.b.c` lives at `<root>/a/b/c` for every root where that
//!   directory exists.
//! - A configured root that does not exist is an error, not an empty root.

use crate::discovery::error::ResolutionError;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable holding the search path (platform path-list syntax).
pub const SEARCH_PATH_ENV: &str = "SDKSCAN_SEARCH_PATH";
/// File extension of loadable-unit entries, without the dot.
pub const DEFAULT_UNIT_EXTENSION: &str = "plugin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    roots: Vec<PathBuf>,
    unit_extension: String,
}

impl Default for SearchPath {
    fn default() -> Self {
        Self::new(Vec::<PathBuf>::new())
    }
}

impl SearchPath {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::<PathBuf>::into).collect(),
            unit_extension: DEFAULT_UNIT_EXTENSION.to_string(),
        }
    }

    /// Reads roots from `SDKSCAN_SEARCH_PATH`; unset means no roots.
    pub fn from_env() -> Self {
        match env::var_os(SEARCH_PATH_ENV) {
            Some(value) => {
                Self::new(env::split_paths(&value).filter(|path| !path.as_os_str().is_empty()))
            }
            None => Self::default(),
        }
    }

    /// Overrides the loadable-unit file extension.
    pub fn with_unit_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.unit_extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn unit_extension(&self) -> &str {
        &self.unit_extension
    }

    /// Returns whether `path` names a loadable unit by extension.
    pub fn is_unit_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.unit_extension)
    }

    /// Returns every directory contributing `namespace`, in root order.
    ///
    /// # Errors
    /// - `MissingSearchRoot` when a configured root does not exist.
    pub fn roots_for(&self, namespace: &str) -> Result<Vec<PathBuf>, ResolutionError> {
        let relative = namespace_path(namespace);
        let mut dirs = Vec::new();
        for root in &self.roots {
            if !root.is_dir() {
                return Err(ResolutionError::MissingSearchRoot(root.clone()));
            }
            let candidate = root.join(&relative);
            if candidate.is_dir() {
                dirs.push(candidate);
            }
        }
        Ok(dirs)
    }

    /// Returns the first root-relative file named `resource`, if any.
    pub fn find_resource(&self, resource: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| root.join(resource))
            .find(|candidate| candidate.is_file())
    }
}

fn namespace_path(namespace: &str) -> PathBuf {
    namespace.split('.').collect()
}

#[cfg(test)]
mod tests {
    use super::{namespace_path, SearchPath};
    use crate::discovery::error::ResolutionError;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[test]
    fn namespace_maps_to_nested_path() {
        assert_eq!(
            namespace_path("com.acme.ext"),
            Path::new("com").join("acme").join("ext")
        );
    }

    #[test]
    fn roots_for_collects_every_contributing_root() {
        let first = tempfile::tempdir().expect("temp dir");
        let second = tempfile::tempdir().expect("temp dir");
        let third = tempfile::tempdir().expect("temp dir");
        fs::create_dir_all(first.path().join("com/acme")).expect("mkdir");
        fs::create_dir_all(third.path().join("com/acme")).expect("mkdir");

        let search_path = SearchPath::new([first.path(), second.path(), third.path()]);
        let dirs = search_path.roots_for("com.acme").expect("roots should resolve");
        assert_eq!(
            dirs,
            vec![first.path().join("com/acme"), third.path().join("com/acme")]
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        let missing = PathBuf::from("/nonexistent/sdkscan/root");
        let search_path = SearchPath::new([missing.clone()]);
        let err = search_path
            .roots_for("com.acme")
            .expect_err("missing root must fail");
        assert!(matches!(err, ResolutionError::MissingSearchRoot(path) if path == missing));
    }

    #[test]
    fn unit_extension_is_normalized() {
        let search_path = SearchPath::default().with_unit_extension(".ext");
        assert_eq!(search_path.unit_extension(), "ext");
        assert!(search_path.is_unit_file(Path::new("Foo.ext")));
        assert!(!search_path.is_unit_file(Path::new("Foo.plugin")));
        assert!(!search_path.is_unit_file(Path::new("Foo")));
    }

    #[test]
    fn find_resource_prefers_first_root() {
        let first = tempfile::tempdir().expect("temp dir");
        let second = tempfile::tempdir().expect("temp dir");
        fs::write(second.path().join("settings.properties"), "a=1").expect("write");

        let search_path = SearchPath::new([first.path(), second.path()]);
        assert_eq!(
            search_path.find_resource("settings.properties"),
            Some(second.path().join("settings.properties"))
        );

        fs::write(first.path().join("settings.properties"), "a=2").expect("write");
        assert_eq!(
            search_path.find_resource("settings.properties"),
            Some(first.path().join("settings.properties"))
        );
        assert!(search_path.find_resource("absent.properties").is_none());
    }
}
