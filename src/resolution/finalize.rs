use tracing::{debug, warn};

use crate::diagnostics::{check_graph, Diagnostic};
use crate::graph::arena::Arena;
use crate::graph::ApiGraph;
use crate::types::*;

use super::propagate::Propagated;

/// The read-only graph plus the advisory findings of finalize.
pub(crate) struct Finalized {
    pub(crate) graph: ApiGraph,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

/// Finalize phase: sort every accumulating collection, freeze the graph, then
/// run diagnostics over it.
pub(crate) fn run(propagated: Propagated) -> Finalized {
    let mut arena = propagated.arena;

    sort_end_points(&mut arena);
    for id in arena.class_ids() {
        finalize_class(&mut arena, id);
    }

    let mut declared = std::mem::take(&mut arena.declared_classes);
    declared.sort_by(|a, b| arena.class(*a).attributed.name.cmp(&arena.class(*b).attributed.name));
    arena.declared_classes = declared;

    let graph = ApiGraph::new(arena);
    let diagnostics = check_graph(&graph);
    for diagnostic in &diagnostics {
        warn!("{}", diagnostic);
    }

    debug!(diagnostics = diagnostics.len(), "finalize phase complete");

    Finalized { graph, diagnostics }
}

fn sort_end_points(arena: &mut Arena) {
    let mut order = std::mem::take(&mut arena.end_point_order);
    order.sort_by(|a, b| {
        arena
            .end_point(*a)
            .key
            .sort_key()
            .cmp(&arena.end_point(*b).key.sort_key())
    });
    arena.end_point_order = order;

    for index in 0..arena.end_points.len() {
        let id = EndPointId(index as u32);
        let mut methods = arena.end_point(id).methods.clone();
        methods.sort_by_cached_key(|m| arena.method_key(*m));
        methods.dedup();
        arena.end_point_mut(id).methods = methods;
    }
}

fn finalize_class(arena: &mut Arena, id: ClassId) {
    let mut derived = arena.class(id).derived.clone();
    derived.sort_by_cached_key(|d| arena.class(*d).attributed.name.clone());
    derived.dedup();
    arena.class_mut(id).derived = derived;

    let mut owners = vec![AttributedId::Class(id)];
    owners.extend(
        arena
            .class(id)
            .structures
            .iter()
            .map(|s| AttributedId::Structure(*s)),
    );

    for owner in owners {
        let mut factories = arena.attributed(owner).factories.clone();
        factories.sort_by_cached_key(|f| arena.factory_key(f));
        factories.dedup();
        arena.attributed_mut(owner).factories = factories;
    }
}
