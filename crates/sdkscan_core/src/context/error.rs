use crate::discovery::ResolutionError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// Error raised by explicit initialization.
#[derive(Debug)]
pub enum SdkError {
    /// Discovery failed; nothing was published.
    Unexpected(ResolutionError),
}

impl Display for SdkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unexpected(err) => write!(f, "unexpected sdk error: {err}"),
        }
    }
}

impl Error for SdkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unexpected(err) => Some(err),
        }
    }
}

impl From<ResolutionError> for SdkError {
    fn from(value: ResolutionError) -> Self {
        Self::Unexpected(value)
    }
}

/// Error raised while initializing from a properties payload.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Discovery(SdkError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to load sdk properties: {err}"),
            Self::Discovery(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Discovery(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SdkError> for ConfigError {
    fn from(value: SdkError) -> Self {
        Self::Discovery(value)
    }
}
