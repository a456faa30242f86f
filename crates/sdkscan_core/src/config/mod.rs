//! Discovery configuration source.
//!
//! # Responsibility
//! - Locate the properties payload name (override setting or default).
//! - Extract the namespace set from the `packages` key.
//!
//! # Invariants
//! - A blank or absent `packages` value means "no configuration", never an
//!   empty namespace set.
//! - Parsed namespace sets never contain empty strings.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::env;

pub mod properties;

pub use properties::Properties;

/// Override setting naming the properties resource.
pub const PROPERTIES_FILE_SETTING: &str = "liquibase.sdk.properties.file";
/// Shell-friendly spelling of `PROPERTIES_FILE_SETTING`.
pub const PROPERTIES_FILE_ENV: &str = "LIQUIBASE_SDK_PROPERTIES_FILE";
/// Resource name used when no override is set.
pub const DEFAULT_PROPERTIES_FILE: &str = "liquibase.sdk.properties";
/// Key holding the comma separated namespace list.
pub const PACKAGES_KEY: &str = "packages";

static PACKAGE_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*").expect("valid package separator regex"));

/// Returns the properties resource name from the process environment.
pub fn properties_file_name() -> String {
    properties_file_name_with(|key| env::var(key).ok())
}

/// Resolves the properties resource name through `lookup`.
///
/// `PROPERTIES_FILE_SETTING` takes precedence over `PROPERTIES_FILE_ENV`;
/// blank values are ignored.
pub fn properties_file_name_with(lookup: impl Fn(&str) -> Option<String>) -> String {
    [PROPERTIES_FILE_SETTING, PROPERTIES_FILE_ENV]
        .into_iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_PROPERTIES_FILE.to_string())
}

/// Splits a `packages` value into namespaces.
///
/// Returns `None` for a blank value.
pub fn parse_packages(value: &str) -> Option<BTreeSet<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(
        PACKAGE_SEPARATOR_RE
            .split(trimmed)
            .map(str::trim)
            .filter(|namespace| !namespace.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Reads the namespace set from a parsed payload.
pub fn packages_from(properties: &Properties) -> Option<BTreeSet<String>> {
    properties.get(PACKAGES_KEY).and_then(parse_packages)
}
