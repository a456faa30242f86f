//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive the process-wide discovery context from environment settings.
//! - Print a deterministic JSON summary of what was discovered.
//!
//! Environment:
//! - `SDKSCAN_SEARCH_PATH`: roots to scan (platform path-list syntax).
//! - `SDKSCAN_LOG`: log level, defaults per build mode; logs go to stderr.
//! - `SDKSCAN_CAPABILITY`: optional capability id or marker name; adds the
//!   implementations of that capability to the summary.
//! - `liquibase.sdk.properties.file` / `LIQUIBASE_SDK_PROPERTIES_FILE`:
//!   properties resource name.
//!
//! The binary registers a small set of demo types under `sdkscan.demo`. A
//! search root holding `sdkscan/demo/<Name>.plugin` units and a properties
//! file with `packages=sdkscan.demo` yields a non-empty capability index.

use sdkscan_core::{
    default_log_level, get_instance, init_stderr_logging, install_loader, parse_capability,
    ExtensionCapability, Loader, RegistryError, SdkContext, SearchPath, TypeHandle, TypeRegistry,
};
use std::process::ExitCode;

const LOG_LEVEL_ENV: &str = "SDKSCAN_LOG";
const CAPABILITY_ENV: &str = "SDKSCAN_CAPABILITY";

fn main() -> ExitCode {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_stderr_logging(&level) {
        eprintln!("sdkscan: {err}");
        return ExitCode::FAILURE;
    }

    let capability = match std::env::var(CAPABILITY_ENV) {
        Ok(value) => match parse_capability(&value) {
            Ok(capability) => Some(capability),
            Err(err) => {
                log::error!(
                    "event=cli_capability module=cli status=error error={}",
                    err
                );
                eprintln!("sdkscan: {CAPABILITY_ENV}: {err}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => None,
    };

    let registry = match demo_registry() {
        Ok(registry) => registry,
        Err(err) => {
            log::error!("event=cli_registry module=cli status=error error={}", err);
            return ExitCode::FAILURE;
        }
    };
    install_loader(Loader::new(SearchPath::from_env(), registry));
    let context = get_instance();

    let mut summary = serde_json::json!({
        "version": sdkscan_core::core_version(),
        "initialized": context.is_initialized(),
        "discovery": context.snapshot(),
    });
    if let Some(capability) = capability {
        summary["capability"] = capability_summary(&context, capability);
    }
    match serde_json::to_string_pretty(&summary) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=cli_summary module=cli status=error error={}", err);
            ExitCode::FAILURE
        }
    }
}

/// Types the binary knows how to load.
fn demo_registry() -> Result<TypeRegistry, RegistryError> {
    let base_change = TypeHandle::abstract_type("sdkscan.demo.AbstractDemoChange")
        .implements(ExtensionCapability::Change)
        .build();
    let add_column = TypeHandle::concrete("sdkscan.demo.AddDemoColumn")
        .extends(&base_change)
        .build();
    let generator = TypeHandle::concrete("sdkscan.demo.DemoColumnGenerator")
        .implements(ExtensionCapability::SqlGenerator)
        .build();

    let mut registry = TypeRegistry::new();
    registry.register_all([base_change, add_column, generator])?;
    Ok(registry)
}

fn capability_summary(
    context: &SdkContext,
    capability: ExtensionCapability,
) -> serde_json::Value {
    let types: Vec<String> = context
        .types_for(capability)
        .iter()
        .map(|handle| handle.name().to_string())
        .collect();
    serde_json::json!({
        "id": capability,
        "marker": capability.marker_name(),
        "types": types,
    })
}

#[cfg(test)]
mod tests {
    use super::{capability_summary, demo_registry};
    use sdkscan_core::{classify, ExtensionCapability, Loader, SdkContext, SearchPath};
    use std::collections::BTreeSet;
    use std::fs;

    #[test]
    fn demo_registry_fills_both_capabilities() {
        let registry = demo_registry().expect("demo types should register");
        let types: BTreeSet<_> = registry
            .names()
            .iter()
            .filter_map(|name| registry.get(name))
            .collect();
        assert_eq!(types.len(), 3);

        let index = classify(&types);
        assert!(index.contains(ExtensionCapability::Change, "sdkscan.demo.AddDemoColumn"));
        assert!(!index.contains(ExtensionCapability::Change, "sdkscan.demo.AbstractDemoChange"));
        assert!(index.contains(
            ExtensionCapability::SqlGenerator,
            "sdkscan.demo.DemoColumnGenerator"
        ));
        assert_eq!(index.total_types(), 2);
    }

    #[test]
    fn capability_summary_lists_marker_and_types() {
        let root = tempfile::tempdir().expect("temp dir");
        let dir = root.path().join("sdkscan/demo");
        fs::create_dir_all(&dir).expect("mkdir");
        for unit in ["AbstractDemoChange", "AddDemoColumn", "DemoColumnGenerator"] {
            fs::write(dir.join(format!("{unit}.plugin")), b"").expect("write unit");
        }

        let registry = demo_registry().expect("demo types should register");
        let mut context = SdkContext::new(Loader::new(SearchPath::new([root.path()]), registry));
        context.init(["sdkscan.demo"]).expect("init should succeed");

        let summary = capability_summary(&context, ExtensionCapability::Change);
        assert_eq!(summary["id"], "change");
        assert_eq!(summary["marker"], "liquibase.change.Change");
        assert_eq!(
            summary["types"],
            serde_json::json!(["sdkscan.demo.AddDemoColumn"])
        );
    }
}
