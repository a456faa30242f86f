//! Type model for extension discovery.
//!
//! # Responsibility
//! - Define the closed capability set and explicit type metadata.
//! - Keep identity rules (name-based) in one place.
//!
//! # Invariants
//! - Type identity is the fully-qualified name.
//! - Capability priority order is fixed at build time.

pub mod capability;
pub mod names;
pub mod type_descriptor;
