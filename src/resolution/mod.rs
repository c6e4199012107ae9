/// Resolution pipeline.
///
/// Registration populates the symbol registries; the reference, propagate and
/// finalize phases then turn raw declarations into the finished graph.
mod finalize;
mod pipeline;
mod propagate;
mod reference;
mod registration;

/// Parameter type inference.
pub mod inference;

/// Value variant resolution.
pub mod values;

pub use pipeline::{resolve, Resolution, ResolutionStats};
