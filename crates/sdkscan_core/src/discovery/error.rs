use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

/// Failure while walking namespaces. Any one of these aborts the whole walk.
#[derive(Debug)]
pub enum ResolutionError {
    MalformedNamespace(String),
    MissingSearchRoot(PathBuf),
    InvalidUnitName(PathBuf),
    Io { path: PathBuf, source: io::Error },
    UnregisteredType { name: String, path: PathBuf },
}

impl ResolutionError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Stable short code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedNamespace(_) => "malformed_namespace",
            Self::MissingSearchRoot(_) => "missing_search_root",
            Self::InvalidUnitName(_) => "invalid_unit_name",
            Self::Io { .. } => "io",
            Self::UnregisteredType { .. } => "unregistered_type",
        }
    }
}

impl Display for ResolutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNamespace(value) => write!(f, "namespace is malformed: `{value}`"),
            Self::MissingSearchRoot(path) => {
                write!(f, "search path root does not exist: {}", path.display())
            }
            Self::InvalidUnitName(path) => {
                write!(f, "unit file name is not a valid type name: {}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::UnregisteredType { name, path } => write!(
                f,
                "no type registered for `{name}` (found at {})",
                path.display()
            ),
        }
    }
}

impl Error for ResolutionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
