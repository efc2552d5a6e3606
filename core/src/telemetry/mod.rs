//! telemetry/mod.rs
//! Run telemetry: stage timers, the size accumulator and its summary, and
//! the final report.
//!
//! Notes:
//! - Compression ratio here is original/compressed (higher is better).
//! - Throughput is bytes fed to the codec over time spent inside it.

pub mod metrics;
pub mod report;
pub mod timers;

pub use metrics::*;
pub use report::*;
pub use timers::*;
