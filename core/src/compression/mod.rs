//! compression/mod.rs
//! Codec layer: identifiers, per-codec implementations, the dpzip size
//! model, the registry, and the per-chunk adapter.

pub mod adapter;
pub mod codecs;
pub mod constants;
pub mod estimator;
pub mod registry;
pub mod types;

pub use adapter::*;
pub use constants::*;
pub use estimator::*;
pub use registry::*;
pub use types::*;
