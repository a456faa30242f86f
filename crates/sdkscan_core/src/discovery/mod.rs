//! Extension discovery: namespace walking and capability classification.
//!
//! # Responsibility
//! - Turn a namespace set into the flat set of registered types under it.
//! - Turn that set into the capability index.
//!
//! # Invariants
//! - Both steps are synchronous and side-effect free apart from reads.
//! - The resolver either returns every type or an error, never a subset.

pub mod classifier;
pub mod error;
pub mod resolver;

pub use classifier::{classify, extension_capability, CapabilityIndex};
pub use error::ResolutionError;
pub use resolver::{resolve, NamespaceResolver};
