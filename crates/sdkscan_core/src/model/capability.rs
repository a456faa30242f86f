//! Recognized extension capabilities.
//!
//! # Responsibility
//! - Define the closed set of roles a discovered type can fulfill.
//! - Fix the priority order used when a type declares several roles.
//!
//! # Invariants
//! - The set is closed at build time; there is no runtime registration.
//! - `ExtensionCapability::ALL` is ordered by classification priority.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Extension role a concrete type can implement to be treated as a plugin.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionCapability {
    /// Database change (a changelog refactoring step).
    Change,
    /// SQL generator for one statement type.
    SqlGenerator,
}

impl ExtensionCapability {
    /// Every capability, in classification priority order.
    pub const ALL: [ExtensionCapability; 2] = [Self::Change, Self::SqlGenerator];

    /// Stable string id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Change => CAPABILITY_CHANGE,
            Self::SqlGenerator => CAPABILITY_SQL_GENERATOR,
        }
    }

    /// Fully-qualified name of the marker interface this capability stands for.
    pub fn marker_name(self) -> &'static str {
        match self {
            Self::Change => "liquibase.change.Change",
            Self::SqlGenerator => "liquibase.sqlgenerator.SqlGenerator",
        }
    }
}

impl Display for ExtensionCapability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String id for the change capability.
pub const CAPABILITY_CHANGE: &str = "change";
/// String id for the SQL generator capability.
pub const CAPABILITY_SQL_GENERATOR: &str = "sql_generator";

/// Parses a capability from its string id or its marker name.
pub fn parse_capability(value: &str) -> Result<ExtensionCapability, CapabilityParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(CapabilityParseError::EmptyCapability);
    }

    ExtensionCapability::ALL
        .into_iter()
        .find(|capability| {
            capability.as_str() == normalized || capability.marker_name() == normalized
        })
        .ok_or_else(|| CapabilityParseError::UnsupportedCapability(normalized.to_string()))
}

/// Capability parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityParseError {
    EmptyCapability,
    UnsupportedCapability(String),
}

impl Display for CapabilityParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCapability => write!(f, "extension capability must not be empty"),
            Self::UnsupportedCapability(value) => {
                write!(f, "extension capability is unsupported: {value}")
            }
        }
    }
}

impl Error for CapabilityParseError {}

#[cfg(test)]
mod tests {
    use super::{parse_capability, CapabilityParseError, ExtensionCapability};

    #[test]
    fn priority_order_puts_change_first() {
        assert_eq!(
            ExtensionCapability::ALL,
            [ExtensionCapability::Change, ExtensionCapability::SqlGenerator]
        );
        assert!(ExtensionCapability::Change < ExtensionCapability::SqlGenerator);
    }

    #[test]
    fn parses_ids_and_marker_names() {
        assert_eq!(
            parse_capability("change").expect("change parse"),
            ExtensionCapability::Change
        );
        assert_eq!(
            parse_capability(" sql_generator ").expect("sql_generator parse"),
            ExtensionCapability::SqlGenerator
        );
        assert_eq!(
            parse_capability("liquibase.sqlgenerator.SqlGenerator").expect("marker parse"),
            ExtensionCapability::SqlGenerator
        );
    }

    #[test]
    fn rejects_empty_and_unknown_values() {
        assert_eq!(
            parse_capability("  ").expect_err("blank must fail"),
            CapabilityParseError::EmptyCapability
        );
        assert_eq!(
            parse_capability("Change").expect_err("ids are case sensitive"),
            CapabilityParseError::UnsupportedCapability("Change".to_string())
        );
    }

    #[test]
    fn serializes_as_snake_case_id() {
        let json = serde_json::to_string(&ExtensionCapability::SqlGenerator)
            .expect("capability should serialize");
        assert_eq!(json, "\"sql_generator\"");
    }
}
