//! constants.rs
//! Run-wide sizing defaults for the chunked benchmark.

/// Sources at or below this size are read fully into memory (1 GiB).
pub const IN_MEMORY_THRESHOLD: u64 = 1024 * 1024 * 1024;

/// Window size used when streaming sources above the threshold (1 GiB).
pub const DEFAULT_WINDOW_SIZE: usize = 1024 * 1024 * 1024;

/// Default chunk size in KiB.
pub const DEFAULT_CHUNK_KB: usize = 4;

/// Percentiles reported over per-chunk compressed sizes.
pub const REPORT_PERCENTILES: &[f64] = &[
    1.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 95.0, 99.0, 99.9,
];

/// Floor for measured codec time, in seconds.
/// Sub-resolution timings would otherwise divide by zero in throughput.
pub const MIN_ELAPSED_SECS: f64 = 1e-9;

/// Bytes per MB for throughput reporting.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Convert a chunk size in KiB to bytes. Zero means "whole input".
/// `None` when the byte count does not fit in `usize`.
#[inline]
pub const fn chunk_bytes(chunk_kb: usize) -> Option<usize> {
    chunk_kb.checked_mul(1024)
}
