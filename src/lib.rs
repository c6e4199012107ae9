pub mod apigraph;
pub mod config;
pub mod declaration;
pub mod diagnostics;
pub mod errors;
pub mod graph;
pub mod registry;
pub mod report;
pub mod resolution;
pub mod types;
pub mod typing;
