/// Arena owning every node by identifier.
pub(crate) mod arena;

/// The finished read-only graph.
pub mod api_graph;

/// Node kinds of the graph.
pub mod node;

/// Value variants of request arguments.
pub mod value;

pub use api_graph::ApiGraph;
pub use node::{
    Argument, Attribute, Attributed, AttributedType, Builtin, Class, EndPoint, Method, Parameter,
    Structure,
};
pub use value::{Value, ValueKind};
