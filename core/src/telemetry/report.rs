//! telemetry/report.rs
//! Immutable result of one run, plus its stdout rendering.
//!
//! The text form is the stable user-facing output; the JSON form carries the
//! extra fields (timings, peak buffer, exact ratio).
use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::compression::{CodecKind, Direction};
use crate::telemetry::metrics::MetricsSummary;
use crate::telemetry::timers::TelemetryTimer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// RFC 3339 start time.
    pub started_at: String,
    pub codec: CodecKind,
    pub direction: Direction,
    /// Resolved level; `None` is the codec library default.
    pub level: Option<i32>,
    pub chunk_kb: usize,
    pub source_bytes: u64,
    /// Whether the source was loaded whole instead of streamed in windows.
    pub in_memory: bool,
    pub windows: u64,
    pub chunks: u64,
    /// Largest source buffer held at once.
    pub peak_buffer_bytes: usize,
    pub workers: usize,
    pub elapsed_ms: f64,
    pub stage_times_ms: BTreeMap<String, f64>,
    pub throughput_mbps: f64,
    /// Present for compress runs only.
    pub summary: Option<MetricsSummary>,
}

impl RunReport {
    pub(crate) fn stage_times_ms(timer: &TelemetryTimer) -> BTreeMap<String, f64> {
        timer
            .stage_times
            .iter()
            .map(|(stage, dur)| (stage.to_string(), dur.as_secs_f64() * 1_000.0))
            .collect()
    }

    /// Write the metrics block. Decompress runs write nothing.
    pub fn print_metrics<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let Some(summary) = &self.summary else {
            return Ok(());
        };
        writeln!(w, "Original dataset bytes: {}", self.source_bytes)?;
        writeln!(w, "Total compressed bytes: {}", summary.total_compressed)?;
        writeln!(w, "Percentile compressed chunk size:")?;

        let labels: Vec<String> = summary.percentiles.iter().map(|p| p.label()).collect();
        let values: Vec<String> = summary.percentiles.iter().map(|p| format!("{:.0}", p.value)).collect();
        writeln!(w, "\t{}", labels.join("\t"))?;
        writeln!(w, "\t{}", values.join("\t"))?;

        writeln!(w, "Average compression ratio: {:.2}", summary.average_ratio)?;
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
