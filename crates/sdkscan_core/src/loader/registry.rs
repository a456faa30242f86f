//! Name-to-type lookup table filled by plugin modules at startup.

use crate::model::names::is_valid_dotted_name;
use crate::model::type_descriptor::TypeHandle;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Type registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidTypeName(String),
    DuplicateType(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTypeName(value) => write!(f, "type name is invalid: {value}"),
            Self::DuplicateType(value) => write!(f, "type already registered: {value}"),
        }
    }
}

impl Error for RegistryError {}

/// Registered types keyed by fully-qualified name.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeHandle>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one type.
    pub fn register(&mut self, handle: TypeHandle) -> Result<(), RegistryError> {
        let name = handle.name().to_string();
        if !is_valid_dotted_name(&name) {
            return Err(RegistryError::InvalidTypeName(name));
        }
        if self.types.contains_key(name.as_str()) {
            return Err(RegistryError::DuplicateType(name));
        }

        self.types.insert(name, handle);
        Ok(())
    }

    /// Registers every handle, stopping at the first rejected one.
    pub fn register_all(
        &mut self,
        handles: impl IntoIterator<Item = TypeHandle>,
    ) -> Result<(), RegistryError> {
        for handle in handles {
            self.register(handle)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns one type by fully-qualified name.
    pub fn get(&self, name: &str) -> Option<TypeHandle> {
        self.types.get(name).cloned()
    }

    /// Returns sorted registered names.
    pub fn names(&self) -> Vec<String> {
        self.types.keys().cloned().collect()
    }
}
