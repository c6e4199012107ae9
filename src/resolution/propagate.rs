use tracing::debug;

use crate::graph::arena::Arena;
use crate::types::*;
use crate::typing::Type;

use super::reference::Referenced;

/// Every back-reference has been announced to its target.
pub(crate) struct Propagated {
    pub(crate) arena: Arena,
}

/// Propagate phase.
///
/// Each declaration only appends to collections owned by *other* nodes, and
/// reads nothing another declaration appends during this phase, so a single
/// sweep suffices.
pub(crate) fn run(referenced: Referenced) -> Propagated {
    let mut arena = referenced.arena;

    for id in arena.class_ids() {
        propagate_class(&mut arena, id);
    }

    debug!(
        bindings = arena
            .end_points
            .iter()
            .map(|ep| ep.methods.len())
            .sum::<usize>(),
        "propagate phase complete"
    );

    Propagated { arena }
}

fn propagate_class(arena: &mut Arena, id: ClassId) {
    if let Some(base) = arena.class(id).base {
        arena.class_mut(base).derived.push(id);
    }

    let class = arena.class(id);
    let mut attributes = class.attributed.attributes.clone();
    for structure in class.structures.clone() {
        attributes.extend_from_slice(&arena.structure(structure).attributed.attributes);
    }

    for attribute in attributes {
        let targets = arena.attribute(attribute).ty.underlying_types();
        announce_factory(arena, &targets, Factory::Attribute(attribute));
    }

    for method in arena.class(id).methods.clone() {
        for end_point in arena.method(method).end_points.clone() {
            arena.end_point_mut(end_point).methods.push(method);
        }

        let targets = arena
            .method(method)
            .return_type
            .as_ref()
            .map(Type::underlying_types)
            .unwrap_or_default();
        announce_factory(arena, &targets, Factory::Method(method));
    }
}

/// Records `factory` on every attributed type among `targets`.
fn announce_factory(arena: &mut Arena, targets: &[TypeId], factory: Factory) {
    for target in targets {
        if let Some(attributed) = target.as_attributed() {
            arena.attributed_mut(attributed).factories.push(factory);
        }
    }
}
