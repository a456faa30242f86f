//! Extension discovery for the SDK.
//! Walks configured namespaces, resolves unit files to registered types and
//! indexes concrete types by the extension capability they implement.

pub mod config;
pub mod context;
pub mod discovery;
pub mod loader;
pub mod logging;
pub mod model;

pub use config::{
    parse_packages, properties_file_name, Properties, DEFAULT_PROPERTIES_FILE, PACKAGES_KEY,
    PROPERTIES_FILE_ENV, PROPERTIES_FILE_SETTING,
};
pub use context::global::{get_instance, install_loader, reset};
pub use context::{ConfigError, DiscoverySnapshot, SdkContext, SdkError};
pub use discovery::{
    classify, extension_capability, resolve, CapabilityIndex, NamespaceResolver, ResolutionError,
};
pub use loader::{Loader, RegistryError, SearchPath, TypeRegistry};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogSink};
pub use model::capability::{parse_capability, CapabilityParseError, ExtensionCapability};
pub use model::type_descriptor::{TypeBuilder, TypeDescriptor, TypeHandle, TypeKind};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
