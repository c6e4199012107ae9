use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ResolverConfig;
use crate::declaration::Declarations;
use crate::diagnostics::Diagnostic;
use crate::errors::Result;
use crate::graph::ApiGraph;

use super::{finalize, propagate, reference, registration};

/// Result of a successful build.
#[derive(Debug)]
pub struct Resolution {
    pub graph: ApiGraph,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: ResolutionStats,
}

/// Counters describing a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolutionStats {
    pub class_count: usize,
    pub end_point_count: usize,
    pub method_count: usize,
    pub diagnostic_count: usize,
    pub duration_ms: u64,
}

/// Resolves raw declarations into the finished graph.
///
/// Registration fills both registries, then reference, propagate and
/// finalize each run as one complete sweep over every declaration. A phase
/// only starts once the previous one has finished for all declarations; each
/// phase consumes the previous phase's output, so the order cannot be broken.
pub fn resolve(declarations: Declarations, config: &ResolverConfig) -> Result<Resolution> {
    let start = Instant::now();

    let registration = registration::register(declarations, config)?;
    let referenced = reference::run(registration)?;
    let propagated = propagate::run(referenced);
    let finalize::Finalized { graph, diagnostics } = finalize::run(propagated);

    let stats = ResolutionStats {
        class_count: graph.class_count(),
        end_point_count: graph.end_point_count(),
        method_count: graph.method_count(),
        diagnostic_count: diagnostics.len(),
        duration_ms: start.elapsed().as_millis() as u64,
    };

    info!(
        classes = stats.class_count,
        end_points = stats.end_point_count,
        methods = stats.method_count,
        warnings = stats.diagnostic_count,
        "resolved API definition"
    );

    Ok(Resolution {
        graph,
        diagnostics,
        stats,
    })
}
