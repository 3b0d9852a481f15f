//! Domain services: pure helpers shared by use cases and adapters.

mod pricing;

pub use pricing::*;
