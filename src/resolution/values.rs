use crate::declaration::{RawArgument, RawValue};
use crate::errors::{ApiGraphError, Result};
use crate::graph::node::Argument;
use crate::graph::{Value, ValueKind};

/// Resolves a tagged raw value into its variant.
///
/// Dispatch is on the explicit `kind` tag; unrecognized tags are fatal.
pub fn resolve_value(raw: &RawValue, context: &str) -> Result<Value> {
    let kind = ValueKind::from_str(&raw.kind).ok_or_else(|| ApiGraphError::UnknownValueKind {
        kind: raw.kind.clone(),
        context: context.to_string(),
    })?;

    let field = |value: &Option<String>, name: &str| {
        value.clone().ok_or_else(|| ApiGraphError::MalformedValue {
            kind: raw.kind.clone(),
            field: name.to_string(),
            context: context.to_string(),
        })
    };

    let value = match kind {
        ValueKind::Attribute => Value::Attribute {
            attribute: field(&raw.attribute, "attribute")?,
        },
        ValueKind::EndPoint => Value::EndPoint,
        ValueKind::Parameter => Value::Parameter {
            parameter: field(&raw.parameter, "parameter")?,
        },
        ValueKind::RepositoryOwner => Value::RepositoryOwner {
            repository: field(&raw.repository, "repository")?,
        },
        ValueKind::RepositoryName => Value::RepositoryName {
            repository: field(&raw.repository, "repository")?,
        },
    };

    Ok(value)
}

/// Resolves a list of arguments, keeping their declared order.
pub fn resolve_arguments(raw: &[RawArgument], context: &str) -> Result<Vec<Argument>> {
    raw.iter()
        .map(|argument| {
            let value = resolve_value(
                &argument.value,
                &format!("{context} argument '{}'", argument.name),
            )?;
            Ok(Argument {
                name: argument.name.clone(),
                value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_recognized_kind() {
        assert_eq!(
            resolve_value(&RawValue::end_point(), "t").unwrap(),
            Value::EndPoint
        );
        assert_eq!(
            resolve_value(&RawValue::attribute("url"), "t").unwrap(),
            Value::Attribute {
                attribute: "url".to_string()
            }
        );
        assert_eq!(
            resolve_value(&RawValue::parameter("title"), "t").unwrap(),
            Value::Parameter {
                parameter: "title".to_string()
            }
        );
        assert_eq!(
            resolve_value(&RawValue::repository_owner("repo"), "t")
                .unwrap()
                .repository(),
            Some("repo")
        );
        assert_eq!(
            resolve_value(&RawValue::repository_name("repo"), "t")
                .unwrap()
                .kind(),
            ValueKind::RepositoryName
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let raw = RawValue {
            kind: "CallbackValue".to_string(),
            attribute: None,
            parameter: None,
            repository: None,
        };
        let err = resolve_value(&raw, "User.get_repo url template").unwrap_err();
        assert!(matches!(err, ApiGraphError::UnknownValueKind { ref kind, .. } if kind == "CallbackValue"));
        assert!(err.to_string().contains("User.get_repo url template"));
    }

    #[test]
    fn missing_payload_is_malformed() {
        let raw = RawValue {
            kind: "parameter".to_string(),
            attribute: None,
            parameter: None,
            repository: None,
        };
        let err = resolve_value(&raw, "t").unwrap_err();
        assert!(matches!(err, ApiGraphError::MalformedValue { ref field, .. } if field == "parameter"));
    }
}
