use serde::Serialize;

use crate::types::*;
use crate::typing::Type;

use super::node::*;

/// Owner of every node of the graph.
///
/// Nodes refer to each other by identifier only; an identifier is the position
/// of the node in its table.
#[derive(Debug, Default, Serialize)]
pub(crate) struct Arena {
    pub(crate) builtins: Vec<Builtin>,
    pub(crate) classes: Vec<Class>,
    pub(crate) structures: Vec<Structure>,
    pub(crate) methods: Vec<Method>,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) end_points: Vec<EndPoint>,
    /// Declared classes, sorted by name.
    pub(crate) declared_classes: Vec<ClassId>,
    /// Endpoints, sorted by (url, verb).
    pub(crate) end_point_order: Vec<EndPointId>,
    pub(crate) builder: Option<ClassId>,
}

impl Arena {
    pub(crate) fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.index()]
    }

    pub(crate) fn class_mut(&mut self, id: ClassId) -> &mut Class {
        &mut self.classes[id.index()]
    }

    pub(crate) fn structure(&self, id: StructureId) -> &Structure {
        &self.structures[id.index()]
    }

    pub(crate) fn method(&self, id: MethodId) -> &Method {
        &self.methods[id.index()]
    }

    pub(crate) fn attribute(&self, id: AttributeId) -> &Attribute {
        &self.attributes[id.index()]
    }

    pub(crate) fn end_point(&self, id: EndPointId) -> &EndPoint {
        &self.end_points[id.index()]
    }

    pub(crate) fn end_point_mut(&mut self, id: EndPointId) -> &mut EndPoint {
        &mut self.end_points[id.index()]
    }

    pub(crate) fn attributed(&self, id: AttributedId) -> &AttributedType {
        match id {
            AttributedId::Class(id) => &self.class(id).attributed,
            AttributedId::Structure(id) => &self.structure(id).attributed,
        }
    }

    pub(crate) fn attributed_mut(&mut self, id: AttributedId) -> &mut AttributedType {
        match id {
            AttributedId::Class(id) => &mut self.classes[id.index()].attributed,
            AttributedId::Structure(id) => &mut self.structures[id.index()].attributed,
        }
    }

    pub(crate) fn type_name(&self, id: TypeId) -> &str {
        match id {
            TypeId::Builtin(id) => &self.builtins[id.index()].name,
            TypeId::Class(id) => &self.class(id).attributed.name,
            TypeId::Structure(id) => &self.structure(id).attributed.name,
        }
    }

    pub(crate) fn type_display(&self, ty: &Type) -> String {
        match ty {
            Type::Named(id) => self.type_name(*id).to_string(),
            Type::LinearCollection { container, content } => format!(
                "{}[{}]",
                self.type_display(container),
                self.type_display(content)
            ),
            Type::MappingCollection {
                container,
                key,
                value,
            } => format!(
                "{}[{}, {}]",
                self.type_display(container),
                self.type_display(key),
                self.type_display(value)
            ),
            Type::Union(members) => members
                .iter()
                .map(|m| self.type_display(m))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }

    /// (class name, method name) ordering key of a method.
    pub(crate) fn method_key(&self, id: MethodId) -> (String, String) {
        let method = self.method(id);
        (
            self.class(method.class).attributed.name.clone(),
            method.name.clone(),
        )
    }

    /// (container name, member name, category) ordering key of a factory.
    pub(crate) fn factory_key(&self, factory: &Factory) -> (String, String, FactoryCategory) {
        match factory {
            Factory::Attribute(id) => {
                let attribute = self.attribute(*id);
                (
                    self.attributed(attribute.owner).name.clone(),
                    attribute.name.clone(),
                    FactoryCategory::Attribute,
                )
            }
            Factory::Method(id) => {
                let (class, method) = self.method_key(*id);
                (class, method, FactoryCategory::Method)
            }
        }
    }

    /// Every class whose members take part in propagation and diagnostics:
    /// framework bases, declared classes and the synthetic builder.
    pub(crate) fn class_ids(&self) -> impl Iterator<Item = ClassId> {
        (0..self.classes.len() as u32).map(ClassId)
    }
}
