//! Completeness checks run over the finished graph.
//!
//! Findings are advisory: they are logged and returned alongside the graph
//! but never abort a build.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{ApiGraph, Attributed, Method};

/// Allow-list entry accepting every parameter.
pub const ALLOW_ALL: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An endpoint declares parameters the implementing method does not take.
    UnimplementedParameters,
    /// A method takes parameters that no argument consumes.
    UnusedParameters,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::UnimplementedParameters => "unimplemented_parameters",
            DiagnosticKind::UnusedParameters => "unused_parameters",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub class: String,
    pub method: String,
    /// `"VERB url"` of the endpoint, for coverage findings.
    pub end_point: Option<String>,
    /// Offending parameter names, sorted.
    pub parameters: Vec<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.kind {
            DiagnosticKind::UnimplementedParameters => "does not implement",
            DiagnosticKind::UnusedParameters => "does not use",
        };
        write!(
            f,
            "{}.{} {} following parameters: {}",
            self.class,
            self.method,
            verb,
            self.parameters.join(", ")
        )?;
        if let Some(end_point) = &self.end_point {
            write!(f, " (of {end_point})")?;
        }
        Ok(())
    }
}

/// Runs every check on every method of the graph, in class then method order.
pub fn check_graph(graph: &ApiGraph) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for class in graph.all_classes() {
        for method in class.methods() {
            diagnostics.extend(check_method(graph, graph.method(*method)));
        }
    }
    diagnostics
}

pub fn check_method(graph: &ApiGraph, method: &Method) -> Vec<Diagnostic> {
    let mut diagnostics = unimplemented_parameters(graph, method);
    diagnostics.extend(unused_parameters(graph, method));
    diagnostics
}

/// Endpoint parameters the method does not take, minus its allow-list.
pub fn unimplemented_parameters(graph: &ApiGraph, method: &Method) -> Vec<Diagnostic> {
    let allowed: BTreeSet<&str> = method
        .allowed_unimplemented()
        .iter()
        .map(String::as_str)
        .collect();
    if allowed.contains(ALLOW_ALL) {
        return Vec::new();
    }

    let implemented: BTreeSet<&str> = method.parameters().iter().map(|p| p.name()).collect();
    let class = graph.class(method.class()).name().to_string();

    method
        .end_points()
        .iter()
        .map(|id| graph.end_point(*id))
        .filter_map(|end_point| {
            let missing: Vec<String> = end_point
                .parameters()
                .iter()
                .map(String::as_str)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .filter(|p| !implemented.contains(p) && !allowed.contains(p))
                .map(str::to_string)
                .collect();
            if missing.is_empty() {
                return None;
            }
            Some(Diagnostic {
                kind: DiagnosticKind::UnimplementedParameters,
                class: class.clone(),
                method: method.name().to_string(),
                end_point: Some(end_point.key().to_string()),
                parameters: missing,
            })
        })
        .collect()
}

/// Method parameters no argument consumes.
///
/// A parameter counts as consumed when a template, url or body argument reads
/// it as a named parameter or splits it as a repository owner/name. Other
/// value kinds do not count.
pub fn unused_parameters(graph: &ApiGraph, method: &Method) -> Option<Diagnostic> {
    let consumed: BTreeSet<&str> = method
        .all_arguments()
        .filter_map(|a| a.value().parameter().or_else(|| a.value().repository()))
        .collect();

    let unused: Vec<String> = method
        .parameters()
        .iter()
        .map(|p| p.name())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|p| !consumed.contains(p))
        .map(str::to_string)
        .collect();

    if unused.is_empty() {
        return None;
    }

    Some(Diagnostic {
        kind: DiagnosticKind::UnusedParameters,
        class: graph.class(method.class()).name().to_string(),
        method: method.name().to_string(),
        end_point: None,
        parameters: unused,
    })
}
