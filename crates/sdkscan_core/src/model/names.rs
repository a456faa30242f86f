//! Dotted name rules shared by namespaces and type names.

use once_cell::sync::Lazy;
use regex::Regex;

static SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid segment regex"));

/// Returns whether `value` is a single valid name segment.
pub fn is_valid_segment(value: &str) -> bool {
    SEGMENT_RE.is_match(value)
}

/// Returns whether `value` is a non-empty dotted sequence of valid segments.
///
/// Namespaces (`com.acme.ext`) and fully-qualified type names
/// (`com.acme.ext.AddAuditColumn`) share this shape.
pub fn is_valid_dotted_name(value: &str) -> bool {
    !value.is_empty() && value.split('.').all(is_valid_segment)
}

/// Joins a namespace and a child segment with a dot.
pub fn child_name(namespace: &str, segment: &str) -> String {
    format!("{namespace}.{segment}")
}
