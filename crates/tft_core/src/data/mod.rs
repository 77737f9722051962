//! Static lookup data injected into the pipeline.

mod names;

pub use names::{fallback_display_name, NameKind, NameResolver, StaticNameResolver};
