//! stream — chunked benchmark driver.
//!
//! Layers, bottom-up: `io` opens sources, `parallelism` sizes the worker
//! pool, `worker` runs codec calls, `driver` ties windows, chunks and
//! metrics together.

pub mod driver;
pub mod io;
pub mod parallelism;
pub mod worker;

pub use driver::{run, run_and_report};
pub use io::InputSource;
pub use parallelism::ParallelismProfile;
