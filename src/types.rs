use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ApiGraphError, Result};

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            /// Position of the node in its arena table.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(
    /// Identifier of a builtin type.
    BuiltinId
);
arena_id!(
    /// Identifier of a class (declared, framework base or synthetic).
    ClassId
);
arena_id!(
    /// Identifier of a structure nested in a class.
    StructureId
);
arena_id!(
    /// Identifier of a method.
    MethodId
);
arena_id!(
    /// Identifier of an attribute of a class or structure.
    AttributeId
);
arena_id!(
    /// Identifier of an endpoint.
    EndPointId
);

/// A named type known to the type registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TypeId {
    Builtin(BuiltinId),
    Class(ClassId),
    Structure(StructureId),
}

impl TypeId {
    /// Returns the attributed type behind this id, if it is a class or a structure.
    pub fn as_attributed(self) -> Option<AttributedId> {
        match self {
            TypeId::Builtin(_) => None,
            TypeId::Class(id) => Some(AttributedId::Class(id)),
            TypeId::Structure(id) => Some(AttributedId::Structure(id)),
        }
    }

    pub fn is_attributed(self) -> bool {
        self.as_attributed().is_some()
    }
}

/// A class or a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributedId {
    Class(ClassId),
    Structure(StructureId),
}

impl From<AttributedId> for TypeId {
    fn from(id: AttributedId) -> Self {
        match id {
            AttributedId::Class(id) => TypeId::Class(id),
            AttributedId::Structure(id) => TypeId::Structure(id),
        }
    }
}

/// Category tag of an attributed type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCategory {
    Class,
    Struct,
}

impl TypeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCategory::Class => "class",
            TypeCategory::Struct => "struct",
        }
    }
}

/// Where a class comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassOrigin {
    /// Declared by the API description.
    Declared,
    /// Framework base class registered from the configuration.
    Base,
    /// Helper class synthesized by the pipeline itself.
    Synthetic,
}

/// What kind of member produces instances of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FactoryCategory {
    Attribute,
    Method,
}

#[allow(clippy::should_implement_trait)]
impl FactoryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactoryCategory::Attribute => "attribute",
            FactoryCategory::Method => "method",
        }
    }

    /// Parses a string into a `FactoryCategory`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<FactoryCategory> {
        match s {
            "attribute" => Some(FactoryCategory::Attribute),
            "method" => Some(FactoryCategory::Method),
            _ => None,
        }
    }
}

/// Record stating that an attribute or a method yields instances of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factory {
    Attribute(AttributeId),
    Method(MethodId),
}

impl Factory {
    pub fn category(&self) -> FactoryCategory {
        match self {
            Factory::Attribute(_) => FactoryCategory::Attribute,
            Factory::Method(_) => FactoryCategory::Method,
        }
    }
}

/// Identity of an endpoint: an HTTP verb and a raw URL path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EndPointKey {
    pub verb: String,
    pub url: String,
}

impl EndPointKey {
    pub fn new(verb: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            url: url.into(),
        }
    }

    /// Parses the `"VERB url"` form used by method declarations.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().split_once(char::is_whitespace) {
            Some((verb, url)) if !verb.is_empty() && !url.trim().is_empty() => {
                Ok(Self::new(verb, url.trim()))
            }
            _ => Err(ApiGraphError::InvalidDeclaration {
                message: format!("endpoint identifier '{s}' is not of the form 'VERB url'"),
            }),
        }
    }

    /// Ordering key of endpoints: url first, then verb.
    pub fn sort_key(&self) -> (&str, &str) {
        (&self.url, &self.verb)
    }
}

impl fmt::Display for EndPointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.url)
    }
}

/// Rewrites `:name` path parameters into the `{name}` positional form.
///
/// Only lowercase ASCII names are recognized; anything else is copied verbatim.
pub fn url_template(url: &str) -> String {
    let mut out = String::with_capacity(url.len() + 8);
    let mut chars = url.chars().peekable();

    while let Some(c) = chars.next() {
        if c != ':' {
            out.push(c);
            continue;
        }

        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_ascii_lowercase() {
                name.push(next);
                chars.next();
            } else {
                break;
            }
        }

        if name.is_empty() {
            out.push(':');
        } else {
            out.push('{');
            out.push_str(&name);
            out.push('}');
        }
    }

    out
}
