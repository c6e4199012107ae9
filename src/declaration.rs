//! Raw declarations as produced by the declaration source.
//!
//! Everything here is name-keyed: types, bases and endpoints are referred to by
//! strings. The resolution pipeline turns these records into the linked graph
//! in [`crate::graph`]; none of these types survive past the reference phase.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// The whole raw API description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Declarations {
    #[serde(default)]
    pub end_points: Vec<RawEndPoint>,
    #[serde(default)]
    pub classes: Vec<RawClass>,
}

impl Declarations {
    /// Parses a JSON declaration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON declaration document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEndPoint {
    pub verb: String,
    pub url: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub doc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawClass {
    pub name: String,
    #[serde(default)]
    pub updatable: bool,
    /// Explicit base class name. When absent a default base is chosen from `updatable`.
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub structures: Vec<RawStructure>,
    #[serde(default)]
    pub attributes: Vec<RawAttribute>,
    #[serde(default)]
    pub methods: Vec<RawMethod>,
    #[serde(default)]
    pub deprecated_attributes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStructure {
    pub name: String,
    #[serde(default)]
    pub updatable: bool,
    #[serde(default)]
    pub attributes: Vec<RawAttribute>,
    #[serde(default)]
    pub deprecated_attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAttribute {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMethod {
    pub name: String,
    /// Implemented endpoints, as `"VERB url"` strings.
    #[serde(default)]
    pub end_points: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
    pub url_template: RawValue,
    #[serde(default)]
    pub url_template_arguments: Vec<RawArgument>,
    #[serde(default)]
    pub url_arguments: Vec<RawArgument>,
    #[serde(default)]
    pub post_arguments: Vec<RawArgument>,
    #[serde(default)]
    pub effects: Vec<String>,
    #[serde(default)]
    pub return_from: Option<String>,
    #[serde(default)]
    pub return_type: Option<TypeDescriptor>,
    /// Endpoint parameters this method intentionally leaves unimplemented.
    /// The entry `"*"` allows every parameter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_unimplemented: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawParameter {
    pub name: String,
    #[serde(default, rename = "type")]
    pub ty: Option<TypeDescriptor>,
    #[serde(default)]
    pub origin: Option<RawOrigin>,
    #[serde(default)]
    pub optional: bool,
}

/// Names the type a parameter stands for and which of its identifying attributes
/// may be passed instead of the full object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOrigin {
    #[serde(rename = "type")]
    pub type_name: String,
    pub attribute: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawArgument {
    pub name: String,
    pub value: RawValue,
}

/// Tagged description of how to obtain a value at call time.
///
/// The tag is kept as a plain string so that unknown kinds are reported by the
/// resolver rather than rejected by the JSON layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawValue {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

impl RawValue {
    fn tagged(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            attribute: None,
            parameter: None,
            repository: None,
        }
    }

    pub fn end_point() -> Self {
        Self::tagged("end_point")
    }

    pub fn attribute(attribute: impl Into<String>) -> Self {
        Self {
            attribute: Some(attribute.into()),
            ..Self::tagged("attribute")
        }
    }

    pub fn parameter(parameter: impl Into<String>) -> Self {
        Self {
            parameter: Some(parameter.into()),
            ..Self::tagged("parameter")
        }
    }

    pub fn repository_owner(repository: impl Into<String>) -> Self {
        Self {
            repository: Some(repository.into()),
            ..Self::tagged("repository_owner")
        }
    }

    pub fn repository_name(repository: impl Into<String>) -> Self {
        Self {
            repository: Some(repository.into()),
            ..Self::tagged("repository_name")
        }
    }
}

/// Name-based description of a type.
///
/// In JSON a bare string is a scalar; objects describe collections and unions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeDescriptor {
    Scalar(String),
    LinearCollection {
        container: Box<TypeDescriptor>,
        content: Box<TypeDescriptor>,
    },
    MappingCollection {
        container: Box<TypeDescriptor>,
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
    },
    Union {
        union: Vec<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    pub fn scalar(name: impl Into<String>) -> Self {
        TypeDescriptor::Scalar(name.into())
    }

    pub fn list_of(container: impl Into<String>, content: TypeDescriptor) -> Self {
        TypeDescriptor::LinearCollection {
            container: Box::new(Self::scalar(container)),
            content: Box::new(content),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Scalar(name) => write!(f, "{name}"),
            TypeDescriptor::LinearCollection { container, content } => {
                write!(f, "{container}[{content}]")
            }
            TypeDescriptor::MappingCollection {
                container,
                key,
                value,
            } => write!(f, "{container}[{key}, {value}]"),
            TypeDescriptor::Union { union } => {
                let parts: Vec<String> = union.iter().map(|t| t.to_string()).collect();
                write!(f, "{}", parts.join(" | "))
            }
        }
    }
}
