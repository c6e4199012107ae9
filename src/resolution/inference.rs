use crate::declaration::{RawOrigin, RawParameter};
use crate::errors::{ApiGraphError, Result};
use crate::graph::node::Parameter;
use crate::registry::ResolutionContext;
use crate::typing::Type;

/// Resolves a parameter, inferring its type from its origin when no type is declared.
pub fn reference_parameter(
    context: &ResolutionContext,
    raw: &RawParameter,
    owner: &str,
) -> Result<Parameter> {
    let (ty, origin) = match (&raw.ty, &raw.origin) {
        (Some(descriptor), _) => (context.types.resolve(descriptor)?, None),
        (None, Some(origin)) => (
            infer_parameter_type(context, origin)?,
            Some(origin.attribute.clone()),
        ),
        (None, None) => {
            return Err(ApiGraphError::InvalidDeclaration {
                message: format!(
                    "parameter '{}' of {} has neither a type nor an origin",
                    raw.name, owner
                ),
            })
        }
    };

    Ok(Parameter {
        name: raw.name.clone(),
        optional: raw.optional,
        ty,
        origin,
    })
}

/// Type accepted for a parameter standing for an object of `origin.type_name`.
///
/// Callers may pass the full object or one of its identifying forms:
/// - `id`: the object or an integer,
/// - `full_name`: the object, an integer or an (owner, name) string pair,
/// - anything else: the object or a string.
pub fn infer_parameter_type(context: &ResolutionContext, origin: &RawOrigin) -> Result<Type> {
    let mut members = vec![Type::Named(context.types.get(&origin.type_name)?)];

    match origin.attribute.as_str() {
        "id" => members.push(Type::Named(context.integer_type()?)),
        "full_name" => {
            members.push(Type::Named(context.integer_type()?));
            members.push(Type::Named(context.string_pair_type()?));
        }
        _ => members.push(Type::Named(context.string_type()?)),
    }

    Ok(Type::union(members))
}
