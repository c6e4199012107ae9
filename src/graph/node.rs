use serde::{Deserialize, Serialize};

use crate::types::*;
use crate::typing::Type;

use super::value::Value;

/// A (verb, url) pair implemented by zero or more methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndPoint {
    pub(crate) id: EndPointId,
    pub(crate) key: EndPointKey,
    pub(crate) url_template: String,
    pub(crate) parameters: Vec<String>,
    pub(crate) doc: String,
    pub(crate) methods: Vec<MethodId>,
}

impl EndPoint {
    pub fn id(&self) -> EndPointId {
        self.id
    }

    pub fn key(&self) -> &EndPointKey {
        &self.key
    }

    pub fn verb(&self) -> &str {
        &self.key.verb
    }

    pub fn url(&self) -> &str {
        &self.key.url
    }

    /// The url with `:name` parameters rewritten to `{name}`.
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Declared parameter names.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Implementing methods, sorted by (class name, method name).
    pub fn methods(&self) -> &[MethodId] {
        &self.methods
    }
}

/// State shared by classes and structures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributedType {
    pub(crate) name: String,
    pub(crate) category: TypeCategory,
    pub(crate) updatable: bool,
    pub(crate) attributes: Vec<AttributeId>,
    pub(crate) deprecated_attributes: Vec<String>,
    pub(crate) factories: Vec<Factory>,
}

impl AttributedType {
    pub(crate) fn new(
        name: String,
        category: TypeCategory,
        updatable: bool,
        attributes: Vec<AttributeId>,
        mut deprecated_attributes: Vec<String>,
    ) -> Self {
        deprecated_attributes.sort();
        deprecated_attributes.dedup();
        Self {
            name,
            category,
            updatable,
            attributes,
            deprecated_attributes,
            factories: Vec::new(),
        }
    }
}

/// Read access to the attributed part of a class or a structure.
pub trait Attributed {
    fn attributed(&self) -> &AttributedType;

    fn name(&self) -> &str {
        &self.attributed().name
    }

    fn category(&self) -> TypeCategory {
        self.attributed().category
    }

    fn is_updatable(&self) -> bool {
        self.attributed().updatable
    }

    /// Attributes, sorted by name.
    fn attributes(&self) -> &[AttributeId] {
        &self.attributed().attributes
    }

    fn deprecated_attributes(&self) -> &[String] {
        &self.attributed().deprecated_attributes
    }

    /// Members producing instances of this type, sorted by (container name, member name).
    fn factories(&self) -> &[Factory] {
        &self.attributed().factories
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub(crate) id: ClassId,
    pub(crate) origin: ClassOrigin,
    pub(crate) module: String,
    pub(crate) attributed: AttributedType,
    pub(crate) structures: Vec<StructureId>,
    pub(crate) methods: Vec<MethodId>,
    pub(crate) base: Option<ClassId>,
    pub(crate) derived: Vec<ClassId>,
}

impl Class {
    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn origin(&self) -> ClassOrigin {
        self.origin
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// Nested structures, sorted by name.
    pub fn structures(&self) -> &[StructureId] {
        &self.structures
    }

    /// Methods, sorted by name.
    pub fn methods(&self) -> &[MethodId] {
        &self.methods
    }

    /// Resolved base class. Only framework base classes have none.
    pub fn base(&self) -> Option<ClassId> {
        self.base
    }

    /// Classes whose base is this class, sorted by name.
    pub fn derived(&self) -> &[ClassId] {
        &self.derived
    }
}

impl Attributed for Class {
    fn attributed(&self) -> &AttributedType {
        &self.attributed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub(crate) id: StructureId,
    pub(crate) class: ClassId,
    pub(crate) attributed: AttributedType,
}

impl Structure {
    pub fn id(&self) -> StructureId {
        self.id
    }

    /// The class owning this structure.
    pub fn class(&self) -> ClassId {
        self.class
    }
}

impl Attributed for Structure {
    fn attributed(&self) -> &AttributedType {
        &self.attributed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub(crate) id: AttributeId,
    pub(crate) owner: AttributedId,
    pub(crate) name: String,
    pub(crate) ty: Type,
}

impl Attribute {
    pub fn id(&self) -> AttributeId {
        self.id
    }

    /// The class or structure containing this attribute.
    pub fn owner(&self) -> AttributedId {
        self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub(crate) id: MethodId,
    pub(crate) class: ClassId,
    pub(crate) name: String,
    pub(crate) parameters: Vec<Parameter>,
    pub(crate) url_template: Value,
    pub(crate) url_template_arguments: Vec<Argument>,
    pub(crate) url_arguments: Vec<Argument>,
    pub(crate) post_arguments: Vec<Argument>,
    pub(crate) effects: Vec<String>,
    pub(crate) return_from: Option<String>,
    pub(crate) return_type: Option<Type>,
    pub(crate) end_points: Vec<EndPointId>,
    pub(crate) allowed_unimplemented: Vec<String>,
}

impl Method {
    pub fn id(&self) -> MethodId {
        self.id
    }

    /// The class containing this method.
    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn url_template(&self) -> &Value {
        &self.url_template
    }

    pub fn url_template_arguments(&self) -> &[Argument] {
        &self.url_template_arguments
    }

    pub fn url_arguments(&self) -> &[Argument] {
        &self.url_arguments
    }

    pub fn post_arguments(&self) -> &[Argument] {
        &self.post_arguments
    }

    /// Template, url and body arguments, in that order.
    pub fn all_arguments(&self) -> impl Iterator<Item = &Argument> {
        self.url_template_arguments
            .iter()
            .chain(&self.url_arguments)
            .chain(&self.post_arguments)
    }

    pub fn effects(&self) -> &[String] {
        &self.effects
    }

    pub fn return_from(&self) -> Option<&str> {
        self.return_from.as_deref()
    }

    pub fn return_type(&self) -> Option<&Type> {
        self.return_type.as_ref()
    }

    /// Implemented endpoints, sorted by (url, verb).
    pub fn end_points(&self) -> &[EndPointId] {
        &self.end_points
    }

    /// Endpoint parameters this method intentionally leaves unimplemented.
    pub fn allowed_unimplemented(&self) -> &[String] {
        &self.allowed_unimplemented
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub(crate) name: String,
    pub(crate) optional: bool,
    pub(crate) ty: Type,
    pub(crate) origin: Option<String>,
}

impl Parameter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Identifying attribute the type was inferred from, if it was inferred.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub(crate) name: String,
    pub(crate) value: Value,
}

impl Argument {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Builtin {
    pub(crate) id: BuiltinId,
    pub(crate) name: String,
}

impl Builtin {
    pub fn id(&self) -> BuiltinId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
