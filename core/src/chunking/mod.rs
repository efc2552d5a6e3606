//! chunking/mod.rs
//! Splitting sources into fixed-size chunks.
//!
//! - `chunker`: zero-copy chunk iterator over an in-memory buffer.
//! - `window`: bounded-window reader for sources too large to load.

pub mod chunker;
pub mod window;

pub use chunker::*;
pub use window::*;
