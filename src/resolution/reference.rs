use std::collections::HashSet;

use tracing::debug;

use crate::declaration::{RawAttribute, RawEndPoint, RawMethod, RawStructure};
use crate::errors::{ApiGraphError, Result};
use crate::graph::arena::Arena;
use crate::graph::node::*;
use crate::registry::ResolutionContext;
use crate::types::*;

use super::inference::reference_parameter;
use super::registration::{PendingClass, Registration};
use super::values::{resolve_arguments, resolve_value};

/// Every name of every declaration has been replaced by an identifier.
///
/// Accumulating collections (derived classes, factories, endpoint methods)
/// are still empty.
pub(crate) struct Referenced {
    pub(crate) arena: Arena,
}

/// Reference phase: classes (with their structures and methods), then the
/// synthetic builder, then endpoints.
///
/// The first unresolved name aborts the whole build.
pub(crate) fn run(registration: Registration) -> Result<Referenced> {
    let Registration {
        context,
        builtins,
        classes,
        declared,
        builder,
        end_points,
    } = registration;

    let mut arena = Arena {
        builtins: builtins
            .into_iter()
            .enumerate()
            .map(|(i, name)| Builtin {
                id: BuiltinId(i as u32),
                name,
            })
            .collect(),
        ..Arena::default()
    };

    for pending in classes {
        reference_class(&context, &mut arena, pending)?;
    }

    for (i, raw) in end_points.into_iter().enumerate() {
        arena.end_points.push(reference_end_point(EndPointId(i as u32), raw));
    }

    arena.declared_classes = declared;
    arena.builder = builder;
    arena.end_point_order = (0..arena.end_points.len() as u32).map(EndPointId).collect();

    debug!(
        classes = arena.classes.len(),
        structures = arena.structures.len(),
        methods = arena.methods.len(),
        attributes = arena.attributes.len(),
        end_points = arena.end_points.len(),
        "reference phase complete"
    );

    Ok(Referenced { arena })
}

fn reference_class(context: &ResolutionContext, arena: &mut Arena, pending: PendingClass) -> Result<()> {
    let PendingClass {
        id,
        origin,
        module,
        declaration,
        structures: structure_ids,
    } = pending;
    debug_assert_eq!(arena.classes.len(), id.index());

    let attributes = reference_attributes(
        context,
        arena,
        AttributedId::Class(id),
        &declaration.name,
        declaration.attributes,
    )?;

    for (structure_id, raw) in structure_ids.iter().zip(declaration.structures) {
        reference_structure(context, arena, *structure_id, id, raw)?;
    }

    let mut raw_methods = declaration.methods;
    raw_methods.sort_by(|a, b| a.name.cmp(&b.name));
    let mut methods = Vec::with_capacity(raw_methods.len());
    for pair in raw_methods.windows(2) {
        if pair[0].name == pair[1].name {
            return Err(ApiGraphError::duplicate(
                "method",
                format!("{}.{}", declaration.name, pair[0].name),
            ));
        }
    }
    for raw in &raw_methods {
        methods.push(reference_method(context, arena, id, &declaration.name, raw)?);
    }

    let base = match origin {
        ClassOrigin::Base => None,
        ClassOrigin::Declared | ClassOrigin::Synthetic => Some(match &declaration.base {
            Some(name) => context.class(name)?,
            None => context.default_base(declaration.updatable)?,
        }),
    };

    arena.classes.push(Class {
        id,
        origin,
        module,
        attributed: AttributedType::new(
            declaration.name,
            TypeCategory::Class,
            declaration.updatable,
            attributes,
            declaration.deprecated_attributes,
        ),
        structures: structure_ids,
        methods,
        base,
        derived: Vec::new(),
    });

    Ok(())
}

fn reference_structure(
    context: &ResolutionContext,
    arena: &mut Arena,
    id: StructureId,
    class: ClassId,
    raw: RawStructure,
) -> Result<()> {
    debug_assert_eq!(arena.structures.len(), id.index());

    let attributes = reference_attributes(
        context,
        arena,
        AttributedId::Structure(id),
        &raw.name,
        raw.attributes,
    )?;

    arena.structures.push(Structure {
        id,
        class,
        attributed: AttributedType::new(
            raw.name,
            TypeCategory::Struct,
            raw.updatable,
            attributes,
            raw.deprecated_attributes,
        ),
    });

    Ok(())
}

/// Resolves attribute types and returns the new attribute ids, sorted by name.
fn reference_attributes(
    context: &ResolutionContext,
    arena: &mut Arena,
    owner: AttributedId,
    owner_name: &str,
    mut raw: Vec<RawAttribute>,
) -> Result<Vec<AttributeId>> {
    raw.sort_by(|a, b| a.name.cmp(&b.name));

    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(raw.len());
    for attribute in raw {
        if !seen.insert(attribute.name.clone()) {
            return Err(ApiGraphError::duplicate(
                "attribute",
                format!("{owner_name}.{}", attribute.name),
            ));
        }

        let id = AttributeId(arena.attributes.len() as u32);
        let ty = context.types.resolve(&attribute.ty)?;
        arena.attributes.push(Attribute {
            id,
            owner,
            name: attribute.name,
            ty,
        });
        ids.push(id);
    }

    Ok(ids)
}

fn reference_method(
    context: &ResolutionContext,
    arena: &mut Arena,
    class: ClassId,
    class_name: &str,
    raw: &RawMethod,
) -> Result<MethodId> {
    let label = format!("{class_name}.{}", raw.name);

    let parameters = raw
        .parameters
        .iter()
        .map(|p| reference_parameter(context, p, &label))
        .collect::<Result<Vec<_>>>()?;

    let mut end_points = raw
        .end_points
        .iter()
        .map(|identifier| context.end_points.get_by_identifier(identifier))
        .collect::<Result<Vec<_>>>()?;
    end_points.sort_by(|a, b| {
        let a = context.end_points.key(*a).map(EndPointKey::sort_key);
        let b = context.end_points.key(*b).map(EndPointKey::sort_key);
        a.cmp(&b)
    });
    end_points.dedup();

    let return_type = raw
        .return_type
        .as_ref()
        .map(|descriptor| context.types.resolve(descriptor))
        .transpose()?;

    let mut allowed_unimplemented = raw.allowed_unimplemented.clone();
    allowed_unimplemented.sort();
    allowed_unimplemented.dedup();

    let id = MethodId(arena.methods.len() as u32);
    arena.methods.push(Method {
        id,
        class,
        name: raw.name.clone(),
        parameters,
        url_template: resolve_value(&raw.url_template, &format!("{label} url template"))?,
        url_template_arguments: resolve_arguments(&raw.url_template_arguments, &label)?,
        url_arguments: resolve_arguments(&raw.url_arguments, &label)?,
        post_arguments: resolve_arguments(&raw.post_arguments, &label)?,
        effects: raw.effects.clone(),
        return_from: raw.return_from.clone(),
        return_type,
        end_points,
        allowed_unimplemented,
    });

    Ok(id)
}

fn reference_end_point(id: EndPointId, raw: RawEndPoint) -> EndPoint {
    let RawEndPoint {
        verb,
        url,
        parameters,
        doc,
    } = raw;

    EndPoint {
        id,
        url_template: url_template(&url),
        key: EndPointKey::new(verb, url),
        parameters,
        doc,
        methods: Vec::new(),
    }
}
