//! Resolved type representations.
//!
//! A [`Type`] is either a named type from the registry or a composite built from
//! named types. Composite types are not registered: each descriptor lookup
//! builds a fresh value, but the named members inside always carry the same
//! registry identity.

use serde::{Deserialize, Serialize};

use crate::types::TypeId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Named(TypeId),
    LinearCollection {
        container: Box<Type>,
        content: Box<Type>,
    },
    MappingCollection {
        container: Box<Type>,
        key: Box<Type>,
        value: Box<Type>,
    },
    Union(Vec<Type>),
}

impl Type {
    pub fn union(members: Vec<Type>) -> Self {
        Type::Union(members)
    }

    /// Returns the named id if this is a plain named type.
    pub fn as_named(&self) -> Option<TypeId> {
        match self {
            Type::Named(id) => Some(*id),
            _ => None,
        }
    }

    /// Expands this type into the named types it is made of.
    ///
    /// Collections contribute their container and element types, unions their
    /// members, recursively. The result is in first-seen order with duplicates
    /// removed.
    pub fn underlying_types(&self) -> Vec<TypeId> {
        let mut out = Vec::new();
        self.collect_underlying(&mut out);
        out
    }

    fn collect_underlying(&self, out: &mut Vec<TypeId>) {
        match self {
            Type::Named(id) => {
                if !out.contains(id) {
                    out.push(*id);
                }
            }
            Type::LinearCollection { container, content } => {
                container.collect_underlying(out);
                content.collect_underlying(out);
            }
            Type::MappingCollection {
                container,
                key,
                value,
            } => {
                container.collect_underlying(out);
                key.collect_underlying(out);
                value.collect_underlying(out);
            }
            Type::Union(members) => {
                for member in members {
                    member.collect_underlying(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BuiltinId, ClassId, StructureId};

    #[test]
    fn underlying_types_of_named_is_itself() {
        let t = Type::Named(TypeId::Class(ClassId(3)));
        assert_eq!(t.underlying_types(), vec![TypeId::Class(ClassId(3))]);
    }

    #[test]
    fn underlying_types_flattens_collections_and_unions() {
        let repo = Type::Named(TypeId::Class(ClassId(1)));
        let list = Type::LinearCollection {
            container: Box::new(Type::Named(TypeId::Class(ClassId(0)))),
            content: Box::new(repo.clone()),
        };
        let t = Type::union(vec![
            list,
            repo,
            Type::Named(TypeId::Builtin(BuiltinId(2))),
            Type::Named(TypeId::Structure(StructureId(0))),
        ]);

        assert_eq!(
            t.underlying_types(),
            vec![
                TypeId::Class(ClassId(0)),
                TypeId::Class(ClassId(1)),
                TypeId::Builtin(BuiltinId(2)),
                TypeId::Structure(StructureId(0)),
            ]
        );
    }
}
