use std::collections::HashMap;

use crate::declaration::TypeDescriptor;
use crate::errors::{ApiGraphError, Result};
use crate::types::TypeId;
use crate::typing::Type;

/// Name-keyed table of every named type: builtins, classes and structures.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    by_name: HashMap<String, TypeId>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`, failing if it is already taken.
    pub fn register(&mut self, name: &str, id: TypeId) -> Result<()> {
        if self.by_name.contains_key(name) {
            return Err(ApiGraphError::duplicate("type", name));
        }
        self.by_name.insert(name.to_string(), id);
        Ok(())
    }

    /// Looks up a named type.
    pub fn get(&self, name: &str) -> Result<TypeId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ApiGraphError::unresolved("type", name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Builds the type described by `descriptor`, looking up every name it contains.
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> Result<Type> {
        match descriptor {
            TypeDescriptor::Scalar(name) => Ok(Type::Named(self.get(name)?)),
            TypeDescriptor::LinearCollection { container, content } => {
                Ok(Type::LinearCollection {
                    container: Box::new(self.resolve(container)?),
                    content: Box::new(self.resolve(content)?),
                })
            }
            TypeDescriptor::MappingCollection {
                container,
                key,
                value,
            } => Ok(Type::MappingCollection {
                container: Box::new(self.resolve(container)?),
                key: Box::new(self.resolve(key)?),
                value: Box::new(self.resolve(value)?),
            }),
            TypeDescriptor::Union { union } => {
                let members = union
                    .iter()
                    .map(|member| self.resolve(member))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Type::Union(members))
            }
        }
    }
}
