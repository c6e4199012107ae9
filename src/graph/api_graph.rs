use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::types::*;
use crate::typing::Type;

use super::arena::Arena;
use super::node::*;

/// The finished, fully cross-referenced API graph.
///
/// Only produced by the finalize phase. It has no mutating API: every
/// collection is already sorted and every reference is an identifier into
/// this graph.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ApiGraph {
    arena: Arena,
}

impl ApiGraph {
    pub(crate) fn new(arena: Arena) -> Self {
        Self { arena }
    }

    /// Declared classes, sorted by name.
    pub fn classes(&self) -> impl Iterator<Item = &Class> + '_ {
        self.arena
            .declared_classes
            .iter()
            .map(|id| self.arena.class(*id))
    }

    /// Endpoints, sorted by (url, verb).
    pub fn end_points(&self) -> impl Iterator<Item = &EndPoint> + '_ {
        self.arena
            .end_point_order
            .iter()
            .map(|id| self.arena.end_point(*id))
    }

    pub fn class_count(&self) -> usize {
        self.arena.declared_classes.len()
    }

    pub fn end_point_count(&self) -> usize {
        self.arena.end_point_order.len()
    }

    pub fn method_count(&self) -> usize {
        self.arena.methods.len()
    }

    /// The synthetic builder class, when one was configured.
    pub fn builder(&self) -> Option<&Class> {
        self.arena.builder.map(|id| self.arena.class(id))
    }

    /// Every class in the graph, framework bases and builder included, in id order.
    pub fn all_classes(&self) -> &[Class] {
        &self.arena.classes
    }

    pub fn class(&self, id: ClassId) -> &Class {
        self.arena.class(id)
    }

    pub fn structure(&self, id: StructureId) -> &Structure {
        self.arena.structure(id)
    }

    pub fn method(&self, id: MethodId) -> &Method {
        self.arena.method(id)
    }

    pub fn attribute(&self, id: AttributeId) -> &Attribute {
        self.arena.attribute(id)
    }

    pub fn end_point(&self, id: EndPointId) -> &EndPoint {
        self.arena.end_point(id)
    }

    pub fn builtin(&self, id: BuiltinId) -> &Builtin {
        &self.arena.builtins[id.index()]
    }

    pub fn attributed(&self, id: AttributedId) -> &AttributedType {
        self.arena.attributed(id)
    }

    pub fn type_name(&self, id: TypeId) -> &str {
        self.arena.type_name(id)
    }

    /// Human-readable rendering of a resolved type, e.g. `PaginatedList[Repository]`.
    pub fn type_display(&self, ty: &Type) -> String {
        self.arena.type_display(ty)
    }

    /// Finds any class (declared, base or builder) by name.
    pub fn find_class(&self, name: &str) -> Option<&Class> {
        self.arena
            .classes
            .iter()
            .find(|c| c.attributed.name == name)
    }

    pub fn find_end_point(&self, verb: &str, url: &str) -> Option<&EndPoint> {
        self.arena
            .end_points
            .iter()
            .find(|ep| ep.key.verb == verb && ep.key.url == url)
    }

    /// Finds a method by class and method name.
    pub fn find_method(&self, class: &str, method: &str) -> Option<&Method> {
        let class = self.find_class(class)?;
        class
            .methods
            .iter()
            .map(|id| self.arena.method(*id))
            .find(|m| m.name == method)
    }

    /// `Class.member` label of a factory.
    pub fn factory_label(&self, factory: &Factory) -> String {
        let (container, member, _) = self.arena.factory_key(factory);
        format!("{container}.{member}")
    }

    /// `Class.method` label of a method.
    pub fn method_label(&self, id: MethodId) -> String {
        let (class, method) = self.arena.method_key(id);
        format!("{class}.{method}")
    }

    /// SHA-256 of the canonical JSON serialization of the graph, hex encoded.
    ///
    /// Two builds from the same declarations always produce the same fingerprint.
    pub fn fingerprint(&self) -> String {
        let bytes = serde_json::to_vec(&self.arena).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        hex::encode(hasher.finalize())
    }
}
