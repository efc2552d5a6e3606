use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::{compression::CompressionError, telemetry::MetricsError};

/// Unified benchmark error covering input, codec, statistics, and validation.
/// - `From<T>` impls enable `?` across layers.
/// - Every variant is fatal for a run; nothing is retried.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Input path missing, not a regular file, or not readable.
    #[error("No such file: \"{}\"", path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    /// Statistics requested over zero recorded sizes.
    #[error("metrics error: {0}")]
    Metrics(#[from] MetricsError),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// Worker pool broke down (a worker exited or a channel closed early).
    #[error("pipeline error: {0}")]
    Pipeline(&'static str),
}
