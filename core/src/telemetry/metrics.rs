//! telemetry/metrics.rs
//! Per-run accumulation of chunk sizes and the distributional summary.
//!
//! Percentiles use linear interpolation between closest ranks
//! (rank = p/100 * (n-1)), the same method as numpy's default.
use std::ops::AddAssign;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::ChunkMeasurement;
use crate::constants::{BYTES_PER_MB, MIN_ELAPSED_SECS, REPORT_PERCENTILES};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("no compressed chunk sizes were recorded; nothing to summarize")]
    EmptyStatisticsInput,
}

/// Mutable accumulator owned by one run (or one worker, merged at the end).
/// Order of recorded sizes carries no meaning.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct SizeAccumulator {
    sizes: Vec<u64>,
    chunks: u64,
    input_bytes: u64,
    codec_time: Duration,
    prepare_time: Duration,
}

impl SizeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one processed chunk.
    pub fn record(&mut self, m: &ChunkMeasurement) {
        self.chunks += 1;
        self.input_bytes += m.input_len as u64;
        self.codec_time += m.elapsed;
        self.prepare_time += m.prepare;
        if let Some(size) = m.recorded_size {
            self.sizes.push(size);
        }
    }

    pub fn merge(&mut self, other: &SizeAccumulator) {
        self.sizes.extend_from_slice(&other.sizes);
        self.chunks += other.chunks;
        self.input_bytes += other.input_bytes;
        self.codec_time += other.codec_time;
        self.prepare_time += other.prepare_time;
    }

    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    pub fn chunks(&self) -> u64 {
        self.chunks
    }

    pub fn input_bytes(&self) -> u64 {
        self.input_bytes
    }

    pub fn codec_time(&self) -> Duration {
        self.codec_time
    }

    pub fn prepare_time(&self) -> Duration {
        self.prepare_time
    }

    pub fn total_recorded(&self) -> u64 {
        self.sizes.iter().sum()
    }

    /// Aggregate MB/s over time spent inside codec calls.
    pub fn throughput_mbps(&self) -> f64 {
        let secs = self.codec_time.as_secs_f64().max(MIN_ELAPSED_SECS);
        self.input_bytes as f64 / BYTES_PER_MB / secs
    }
}

impl AddAssign for SizeAccumulator {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

/// Percentile `p` (0..=100) of an ascending slice.
pub fn percentile(sorted: &[u64], p: f64) -> Result<f64, MetricsError> {
    if sorted.is_empty() {
        return Err(MetricsError::EmptyStatisticsInput);
    }
    let p = p.clamp(0.0, 100.0);
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let (a, b) = (sorted[lo] as f64, sorted[hi] as f64);
    Ok(a + (b - a) * (rank - lo as f64))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileValue {
    pub p: f64,
    pub value: f64,
}

impl PercentileValue {
    /// Column label, e.g. `p50` or `p99.9`.
    pub fn label(&self) -> String {
        if self.p.fract() == 0.0 {
            format!("p{}", self.p as u64)
        } else {
            format!("p{}", self.p)
        }
    }
}

/// Percentiles of unordered values.
pub fn percentiles(values: &[u64], ps: &[f64]) -> Result<Vec<PercentileValue>, MetricsError> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    ps.iter()
        .map(|&p| percentile(&sorted, p).map(|value| PercentileValue { p, value }))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub chunk_count: u64,
    pub chunk_kb: usize,
    pub input_bytes: u64,
    pub total_compressed: u64,
    pub percentiles: Vec<PercentileValue>,
    /// `chunk_count * chunk_kb * 1024 / total_compressed`.
    /// Counts every chunk as full-size, so a short last chunk inflates it.
    pub average_ratio: f64,
    /// `input_bytes / total_compressed`.
    pub exact_ratio: f64,
    pub throughput_mbps: f64,
}

impl MetricsSummary {
    pub fn from_accumulator(acc: &SizeAccumulator, chunk_kb: usize) -> Result<Self, MetricsError> {
        if acc.sizes().is_empty() {
            return Err(MetricsError::EmptyStatisticsInput);
        }
        let chunk_count = acc.sizes().len() as u64;
        let total_compressed = acc.total_recorded();
        let percentiles = percentiles(acc.sizes(), REPORT_PERCENTILES)?;

        // With chunk_kb == 0 the whole input is one chunk and has no nominal size.
        let nominal_bytes = if chunk_kb == 0 {
            acc.input_bytes()
        } else {
            chunk_count.saturating_mul((chunk_kb as u64).saturating_mul(1024))
        };

        Ok(Self {
            chunk_count,
            chunk_kb,
            input_bytes: acc.input_bytes(),
            total_compressed,
            percentiles,
            average_ratio: safe_ratio(nominal_bytes, total_compressed),
            exact_ratio: safe_ratio(acc.input_bytes(), total_compressed),
            throughput_mbps: acc.throughput_mbps(),
        })
    }
}

fn safe_ratio(num: u64, den: u64) -> f64 {
    if den > 0 {
        num as f64 / den as f64
    } else {
        0.0
    }
}
