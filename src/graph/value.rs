use serde::{Deserialize, Serialize};

/// How a request value is obtained at call time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// An attribute of the object the method is called on.
    Attribute { attribute: String },
    /// The endpoint itself (its url template).
    EndPoint,
    /// A named parameter of the method.
    Parameter { parameter: String },
    /// The owner part of a repository-like parameter.
    RepositoryOwner { repository: String },
    /// The name part of a repository-like parameter.
    RepositoryName { repository: String },
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Attribute { .. } => ValueKind::Attribute,
            Value::EndPoint => ValueKind::EndPoint,
            Value::Parameter { .. } => ValueKind::Parameter,
            Value::RepositoryOwner { .. } => ValueKind::RepositoryOwner,
            Value::RepositoryName { .. } => ValueKind::RepositoryName,
        }
    }

    /// The parameter consumed by this value, if it reads one directly.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Value::Parameter { parameter } => Some(parameter),
            _ => None,
        }
    }

    /// The repository-like parameter this value splits, if any.
    pub fn repository(&self) -> Option<&str> {
        match self {
            Value::RepositoryOwner { repository } | Value::RepositoryName { repository } => {
                Some(repository)
            }
            _ => None,
        }
    }
}

/// Recognized value tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Attribute,
    EndPoint,
    Parameter,
    RepositoryOwner,
    RepositoryName,
}

#[allow(clippy::should_implement_trait)]
impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Attribute => "attribute",
            ValueKind::EndPoint => "end_point",
            ValueKind::Parameter => "parameter",
            ValueKind::RepositoryOwner => "repository_owner",
            ValueKind::RepositoryName => "repository_name",
        }
    }

    /// Parses a tag, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<ValueKind> {
        match s {
            "attribute" => Some(ValueKind::Attribute),
            "end_point" => Some(ValueKind::EndPoint),
            "parameter" => Some(ValueKind::Parameter),
            "repository_owner" => Some(ValueKind::RepositoryOwner),
            "repository_name" => Some(ValueKind::RepositoryName),
            _ => None,
        }
    }
}
