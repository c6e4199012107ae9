/// Formats the finished graph and its diagnostics as Markdown, text or JSON.
pub mod formatter;

pub use formatter::{
    format_diagnostics, format_diagnostics_as_json, format_graph_as_json,
    format_graph_as_markdown,
};
