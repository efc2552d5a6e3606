//! chunkbench-core
//!
//! Chunked streaming compression benchmark engine.
//! Splits sources into fixed-size chunks, runs one codec over each chunk, and
//! reports the distribution of compressed sizes. Nothing is written out.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;

pub mod chunking;
pub mod compression;
pub mod telemetry;

// Driver
pub mod stream;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::BenchConfig;
    pub use crate::compression::{CodecKind, Direction, estimate_dpzip_size, process};
    pub use crate::stream::{InputSource, ParallelismProfile, run, run_and_report};
    pub use crate::telemetry::{MetricsSummary, RunReport};
    pub use crate::types::BenchError;
}
