//! chunkbench
//!
//! Measure per-chunk compression ratio and throughput of one codec over a file.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use chunkbench_core::prelude::*;
use chunkbench_core::constants::DEFAULT_CHUNK_KB;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Compressor {
    Gzip,
    Zstd,
    Lz4,
    Dpzip,
}

impl From<Compressor> for CodecKind {
    fn from(c: Compressor) -> Self {
        match c {
            Compressor::Gzip  => CodecKind::Gzip,
            Compressor::Zstd  => CodecKind::Zstd,
            Compressor::Lz4   => CodecKind::Lz4,
            Compressor::Dpzip => CodecKind::Dpzip,
        }
    }
}

/// Compress files in fixed-size chunks and report compressed-size statistics.
#[derive(Debug, Parser)]
#[command(name = "chunkbench", version, about)]
struct Cli {
    /// Codec to benchmark.
    #[arg(value_enum)]
    compressor: Compressor,

    /// Input file.
    input_file_path: PathBuf,

    /// Chunk size in KiB (0 = whole file as one chunk).
    #[arg(long, default_value_t = DEFAULT_CHUNK_KB, env = "CHUNKBENCH_CHUNK_KB")]
    chunk_kb: usize,

    /// Compression level. Defaults: gzip 6, zstd 3, dpzip 3, lz4 library default.
    #[arg(long, allow_negative_numbers = true, env = "CHUNKBENCH_LEVEL")]
    level: Option<i32>,

    /// Benchmark decompression instead of compression.
    #[arg(long)]
    decompress: bool,

    /// Worker threads (1 = sequential, 0 = size from available cores).
    #[arg(long, default_value_t = 1, env = "CHUNKBENCH_WORKERS")]
    workers: usize,

    /// Print the full run report as JSON instead of the text summary.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        let direction = if self.decompress { Direction::Decompress } else { Direction::Compress };
        let parallelism = match self.workers {
            0 => ParallelismProfile::dynamic(self.chunk_kb.saturating_mul(1024), 0.25, 256),
            n => ParallelismProfile::fixed(n),
        };
        BenchConfig::new(self.compressor.into())
            .with_direction(direction)
            .with_level(self.level)
            .with_chunk_kb(self.chunk_kb)
            .with_parallelism(parallelism)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let source = InputSource::file(&cli.input_file_path);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        let report = run(&config, source)?;
        let json = report.to_json().context("serializing run report")?;
        writeln!(out, "{json}")?;
    } else {
        run_and_report(&config, source, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();
    tracing::debug!(?cli, "parsed arguments");

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
