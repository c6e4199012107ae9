/// Symbol registries.
///
/// Both registries are write-once: they are fully populated from the raw
/// declarations before the reference phase starts, and only read afterwards.
mod context;
mod end_points;
mod types;

pub use context::ResolutionContext;
pub use end_points::EndPointRegistry;
pub use types::TypeRegistry;
