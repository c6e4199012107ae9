use crate::config::ResolverConfig;
use crate::errors::{ApiGraphError, Result};
use crate::types::{ClassId, TypeId};

use super::{EndPointRegistry, TypeRegistry};

/// Explicit resolution context handed to every phase.
///
/// Holds both registries plus the configured names the reference phase needs
/// for default bases and parameter inference.
#[derive(Debug)]
pub struct ResolutionContext {
    pub types: TypeRegistry,
    pub end_points: EndPointRegistry,
    mutable_base: String,
    immutable_base: String,
    integer_type: String,
    string_type: String,
    string_pair_type: String,
}

impl ResolutionContext {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            types: TypeRegistry::new(),
            end_points: EndPointRegistry::new(),
            mutable_base: config.mutable_base.clone(),
            immutable_base: config.immutable_base.clone(),
            integer_type: config.integer_type.clone(),
            string_type: config.string_type.clone(),
            string_pair_type: config.string_pair_type.clone(),
        }
    }

    /// Looks up a name that must designate a class.
    pub fn class(&self, name: &str) -> Result<ClassId> {
        match self.types.get(name)? {
            TypeId::Class(id) => Ok(id),
            _ => Err(ApiGraphError::InvalidDeclaration {
                message: format!("'{name}' is used as a base but is not a class"),
            }),
        }
    }

    /// Default base for a class declared without one.
    pub fn default_base(&self, updatable: bool) -> Result<ClassId> {
        if updatable {
            self.class(&self.mutable_base)
        } else {
            self.class(&self.immutable_base)
        }
    }

    pub fn integer_type(&self) -> Result<TypeId> {
        self.types.get(&self.integer_type)
    }

    pub fn string_type(&self) -> Result<TypeId> {
        self.types.get(&self.string_type)
    }

    pub fn string_pair_type(&self) -> Result<TypeId> {
        self.types.get(&self.string_pair_type)
    }
}
