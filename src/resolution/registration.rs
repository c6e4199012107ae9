use tracing::debug;

use crate::config::{BuilderConfig, ResolverConfig};
use crate::declaration::{Declarations, RawClass, RawEndPoint, RawMethod, RawValue, TypeDescriptor};
use crate::errors::Result;
use crate::registry::ResolutionContext;
use crate::types::*;

/// A class waiting for the reference phase, with its identifiers already handed out.
pub(crate) struct PendingClass {
    pub(crate) id: ClassId,
    pub(crate) origin: ClassOrigin,
    pub(crate) module: String,
    /// Structures are sorted by name, in the same order as `structures`.
    pub(crate) declaration: RawClass,
    pub(crate) structures: Vec<StructureId>,
}

/// Output of registration: fully populated registries plus the raw
/// declarations laid out in identifier order.
pub(crate) struct Registration {
    pub(crate) context: ResolutionContext,
    pub(crate) builtins: Vec<String>,
    /// Framework bases, then declared classes, then the builder.
    pub(crate) classes: Vec<PendingClass>,
    pub(crate) declared: Vec<ClassId>,
    pub(crate) builder: Option<ClassId>,
    /// Sorted by (url, verb); position is the endpoint id.
    pub(crate) end_points: Vec<RawEndPoint>,
}

/// Registers every builtin, class, structure and endpoint.
///
/// Declarations are ordered before identifiers are handed out, so the
/// resulting ids do not depend on input order.
pub(crate) fn register(declarations: Declarations, config: &ResolverConfig) -> Result<Registration> {
    let mut context = ResolutionContext::new(config);
    let mut classes: Vec<PendingClass> = Vec::new();
    let mut declared = Vec::new();
    let mut structure_count: u32 = 0;

    for (i, name) in config.builtin_types.iter().enumerate() {
        context
            .types
            .register(name, TypeId::Builtin(BuiltinId(i as u32)))?;
    }

    for name in &config.base_classes {
        let id = ClassId(classes.len() as u32);
        context.types.register(name, TypeId::Class(id))?;
        classes.push(PendingClass {
            id,
            origin: ClassOrigin::Base,
            module: config.base_module.clone(),
            declaration: RawClass {
                name: name.clone(),
                ..RawClass::default()
            },
            structures: Vec::new(),
        });
    }

    let Declarations {
        end_points: mut raw_end_points,
        classes: mut raw_classes,
    } = declarations;

    raw_classes.sort_by(|a, b| a.name.cmp(&b.name));
    apply_allow_list(&mut raw_classes, config);

    for mut declaration in raw_classes {
        let id = ClassId(classes.len() as u32);
        context.types.register(&declaration.name, TypeId::Class(id))?;

        declaration.structures.sort_by(|a, b| a.name.cmp(&b.name));
        let mut structures = Vec::with_capacity(declaration.structures.len());
        for structure in &declaration.structures {
            let structure_id = StructureId(structure_count);
            structure_count += 1;
            context
                .types
                .register(&structure.name, TypeId::Structure(structure_id))?;
            structures.push(structure_id);
        }

        declared.push(id);
        classes.push(PendingClass {
            id,
            origin: ClassOrigin::Declared,
            module: format!("{}{}", config.class_module_prefix, declaration.name),
            declaration,
            structures,
        });
    }

    // The builder is not a type: nothing refers to it by name.
    let builder = config.builder.as_ref().map(|builder_config| {
        let id = ClassId(classes.len() as u32);
        classes.push(PendingClass {
            id,
            origin: ClassOrigin::Synthetic,
            module: builder_config.class.clone(),
            declaration: builder_class(builder_config),
            structures: Vec::new(),
        });
        id
    });

    raw_end_points.sort_by(|a, b| (&a.url, &a.verb).cmp(&(&b.url, &b.verb)));
    for end_point in &raw_end_points {
        context
            .end_points
            .register(EndPointKey::new(&end_point.verb, &end_point.url))?;
    }

    debug!(
        types = context.types.len(),
        end_points = context.end_points.len(),
        classes = classes.len(),
        "registration complete"
    );

    Ok(Registration {
        context,
        builtins: config.builtin_types.clone(),
        classes,
        declared,
        builder,
        end_points: raw_end_points,
    })
}

/// Attaches configured allow-list entries to the method declarations they name.
fn apply_allow_list(classes: &mut [RawClass], config: &ResolverConfig) {
    for gap in &config.allowed_unimplemented {
        let method = classes
            .iter_mut()
            .filter(|c| c.name == gap.class)
            .flat_map(|c| c.methods.iter_mut())
            .find(|m| m.name == gap.method);

        match method {
            Some(method) => method
                .allowed_unimplemented
                .extend(gap.allowed_parameters()),
            None => debug!(
                class = %gap.class,
                method = %gap.method,
                "allow-list entry matches no declared method"
            ),
        }
    }
}

fn builder_class(config: &BuilderConfig) -> RawClass {
    RawClass {
        name: config.class.clone(),
        updatable: false,
        methods: vec![RawMethod {
            name: config.method.clone(),
            end_points: Vec::new(),
            parameters: Vec::new(),
            url_template: RawValue::end_point(),
            url_template_arguments: Vec::new(),
            url_arguments: Vec::new(),
            post_arguments: Vec::new(),
            effects: Vec::new(),
            return_from: None,
            return_type: Some(TypeDescriptor::scalar(&config.return_type)),
            allowed_unimplemented: Vec::new(),
        }],
        ..RawClass::default()
    }
}
