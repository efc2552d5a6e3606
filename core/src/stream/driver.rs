//! stream/driver.rs
//! Stable public entry point for one benchmark run.
//!
//! Sources at or below `in_memory_threshold` are read once and chunked in
//! memory. Larger sources are read one window at a time; every chunk of a
//! window is finished before the next window is read, so the driver never
//! holds more than one window of source bytes. Windows are chunked
//! independently, so the last chunk of a window may be short.
use std::io::Write;
use std::num::NonZeroUsize;

use tracing::{debug, info, warn};

use crate::chunking::{Chunks, WindowReader};
use crate::compression::Direction;
use crate::config::BenchConfig;
use crate::stream::io::InputSource;
use crate::stream::worker::Executor;
use crate::telemetry::{MetricsSummary, RunReport, SizeAccumulator, Stage, TelemetryTimer};
use crate::types::BenchError;

struct SourceStats {
    in_memory: bool,
    windows: u64,
    peak_buffer_bytes: usize,
}

/// Run the benchmark and return its report. Prints nothing.
pub fn run(config: &BenchConfig, source: InputSource) -> Result<RunReport, BenchError> {
    config.validate()?;

    let started_at = chrono::Utc::now().to_rfc3339();
    let mut timer = TelemetryTimer::new();
    let level = config.resolved_level();
    let source_bytes = source.size()?;

    info!(
        source = %source.describe(),
        codec = %config.codec,
        direction = %config.direction,
        ?level,
        chunk_kb = config.chunk_kb,
        source_bytes,
        "starting run"
    );
    if source_bytes == 0 {
        warn!(source = %source.describe(), "source is empty; no chunks will be produced");
    }

    let mut executor = Executor::new(&config.parallelism, config.codec, level, config.direction)?;
    let mut acc = SizeAccumulator::new();

    let stats = if source_bytes <= config.in_memory_threshold {
        process_in_memory(config, &source, &mut executor, &mut acc, &mut timer)?
    } else {
        process_windowed(config, &source, &mut executor, &mut acc, &mut timer)?
    };

    let codec_stage = match config.direction {
        Direction::Compress => Stage::Compress,
        Direction::Decompress => Stage::Decompress,
    };
    timer.add_stage_time(codec_stage, acc.codec_time());
    if !acc.prepare_time().is_zero() {
        timer.add_stage_time(Stage::Prepare, acc.prepare_time());
    }
    timer.finish();

    let summary = match config.direction {
        Direction::Compress => Some(MetricsSummary::from_accumulator(&acc, config.chunk_kb)?),
        Direction::Decompress => None,
    };

    let report = RunReport {
        started_at,
        codec: config.codec,
        direction: config.direction,
        level,
        chunk_kb: config.chunk_kb,
        source_bytes,
        in_memory: stats.in_memory,
        windows: stats.windows,
        chunks: acc.chunks(),
        peak_buffer_bytes: stats.peak_buffer_bytes,
        workers: executor.worker_count(),
        elapsed_ms: timer.elapsed().as_secs_f64() * 1_000.0,
        stage_times_ms: RunReport::stage_times_ms(&timer),
        throughput_mbps: acc.throughput_mbps(),
        summary,
    };

    info!(
        chunks = report.chunks,
        windows = report.windows,
        throughput_mbps = report.throughput_mbps,
        elapsed_ms = report.elapsed_ms,
        "run finished"
    );
    Ok(report)
}

/// Run, then print the metrics block (compress runs only) to `out`.
pub fn run_and_report<W: Write>(
    config: &BenchConfig,
    source: InputSource,
    out: &mut W,
) -> Result<RunReport, BenchError> {
    let report = run(config, source)?;
    report.print_metrics(out)?;
    Ok(report)
}

fn process_in_memory(
    config: &BenchConfig,
    source: &InputSource,
    executor: &mut Executor,
    acc: &mut SizeAccumulator,
    timer: &mut TelemetryTimer,
) -> Result<SourceStats, BenchError> {
    let data = timer.time(Stage::Read, || source.read_all())?;
    let peak_buffer_bytes = data.len();
    debug!(bytes = peak_buffer_bytes, "source loaded in memory");

    let chunks = Chunks::new(data, config.chunk_size()?);
    executor.process(chunks, acc)?;

    Ok(SourceStats {
        in_memory: true,
        windows: u64::from(peak_buffer_bytes > 0),
        peak_buffer_bytes,
    })
}

fn process_windowed(
    config: &BenchConfig,
    source: &InputSource,
    executor: &mut Executor,
    acc: &mut SizeAccumulator,
    timer: &mut TelemetryTimer,
) -> Result<SourceStats, BenchError> {
    let window_size = NonZeroUsize::new(config.window_size)
        .ok_or_else(|| BenchError::Config("window size must be non-zero".into()))?;
    let chunk_size = config.chunk_size()?;
    let reader = source.open()?;
    let mut windows = WindowReader::new(reader, window_size);

    while let Some(window) = timer.time(Stage::Read, || windows.next_window())? {
        debug!(
            index = windows.windows_read() - 1,
            bytes = window.len(),
            "processing window"
        );
        executor.process(Chunks::new(window, chunk_size), acc)?;
    }

    Ok(SourceStats {
        in_memory: false,
        windows: windows.windows_read(),
        peak_buffer_bytes: windows.peak_window(),
    })
}
