use crate::diagnostics::Diagnostic;
use crate::graph::{ApiGraph, Attributed, Class, Value};

/// Formats the resolved graph as a Markdown document.
///
/// One section per declared class (base, derived classes, attributes,
/// structures, methods, factories), followed by the endpoint table.
pub fn format_graph_as_markdown(graph: &ApiGraph) -> String {
    let mut out = String::new();

    out.push_str("## API Definition\n");
    out.push_str(&format!(
        "**Classes:** {} | **Endpoints:** {} | **Methods:** {}\n\n",
        graph.class_count(),
        graph.end_point_count(),
        graph.method_count()
    ));

    out.push_str("### Classes\n");
    if graph.class_count() == 0 {
        out.push_str("_No classes declared._\n\n");
    }
    for class in graph.classes() {
        format_class(graph, class, &mut out);
    }

    out.push_str("### Endpoints\n");
    if graph.end_point_count() == 0 {
        out.push_str("_No endpoints declared._\n");
    }
    for end_point in graph.end_points() {
        let methods: Vec<String> = end_point
            .methods()
            .iter()
            .map(|m| graph.method_label(*m))
            .collect();
        out.push_str(&format!(
            "- `{} {}` -> {}\n",
            end_point.verb(),
            end_point.url_template(),
            if methods.is_empty() {
                "_unimplemented_".to_string()
            } else {
                methods.join(", ")
            }
        ));
    }

    out
}

fn format_class(graph: &ApiGraph, class: &Class, out: &mut String) {
    out.push_str(&format!("#### {} ({})\n", class.name(), class.module()));

    if let Some(base) = class.base() {
        out.push_str(&format!("- base: {}\n", graph.class(base).name()));
    }
    if !class.derived().is_empty() {
        let derived: Vec<&str> = class.derived().iter().map(|d| graph.class(*d).name()).collect();
        out.push_str(&format!("- derived: {}\n", derived.join(", ")));
    }
    if class.is_updatable() {
        out.push_str("- updatable\n");
    }

    for attribute in class.attributes() {
        let attribute = graph.attribute(*attribute);
        out.push_str(&format!(
            "- attribute `{}`: {}\n",
            attribute.name(),
            graph.type_display(attribute.ty())
        ));
    }

    for structure in class.structures() {
        let structure = graph.structure(*structure);
        let attributes: Vec<String> = structure
            .attributes()
            .iter()
            .map(|a| graph.attribute(*a).name().to_string())
            .collect();
        out.push_str(&format!(
            "- struct `{}` {{ {} }}\n",
            structure.name(),
            attributes.join(", ")
        ));
    }

    for method in class.methods() {
        let method = graph.method(*method);
        let parameters: Vec<String> = method
            .parameters()
            .iter()
            .map(|p| {
                let mark = if p.is_optional() { "?" } else { "" };
                format!("{}{}: {}", p.name(), mark, graph.type_display(p.ty()))
            })
            .collect();
        let returns = method
            .return_type()
            .map(|t| format!(" -> {}", graph.type_display(t)))
            .unwrap_or_default();
        let end_points: Vec<String> = method
            .end_points()
            .iter()
            .map(|id| graph.end_point(*id).key().to_string())
            .collect();
        out.push_str(&format!(
            "- method `{}({}){}` via {} [{}]\n",
            method.name(),
            parameters.join(", "),
            returns,
            describe_value(method.url_template()),
            end_points.join(", ")
        ));
    }

    if !class.factories().is_empty() {
        let factories: Vec<String> = class
            .factories()
            .iter()
            .map(|f| format!("{} ({})", graph.factory_label(f), f.category().as_str()))
            .collect();
        out.push_str(&format!("- produced by: {}\n", factories.join(", ")));
    }

    out.push('\n');
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Attribute { attribute } => format!("attribute `{attribute}`"),
        Value::EndPoint => "endpoint".to_string(),
        Value::Parameter { parameter } => format!("parameter `{parameter}`"),
        Value::RepositoryOwner { repository } => format!("owner of `{repository}`"),
        Value::RepositoryName { repository } => format!("name of `{repository}`"),
    }
}

/// Formats the resolved graph as pretty-printed JSON.
pub fn format_graph_as_json(graph: &ApiGraph) -> String {
    serde_json::to_string_pretty(graph).unwrap_or_default()
}

/// One `WARNING:` line per diagnostic.
pub fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        out.push_str(&format!("WARNING: {}\n", diagnostic));
    }
    out
}

/// Formats diagnostics as a pretty-printed JSON array.
pub fn format_diagnostics_as_json(diagnostics: &[Diagnostic]) -> String {
    serde_json::to_string_pretty(diagnostics).unwrap_or_default()
}
