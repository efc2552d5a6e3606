//! compression/adapter.rs
//! Uniform per-chunk interface over every codec.
//!
//! `process` is the raw contract: bytes in, bytes out, plus ratio and
//! throughput. `measure_chunk` is what the driver uses; it yields only the
//! numbers that feed the run's accumulator and drops the output bytes.

use std::time::{Duration, Instant};

use crate::compression::registry::{create_compressor, create_decompressor};
use crate::compression::types::{CodecKind, CompressionError, Compressor, Decompressor, Direction};
use crate::constants::{BYTES_PER_MB, MIN_ELAPSED_SECS};

/// Result of processing one buffer.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Codec output. For dpzip this is the raw zstd frame.
    pub bytes: Vec<u8>,
    /// Size to record in metrics (compress direction only).
    /// For dpzip this is the estimate, not `bytes.len()`.
    pub recorded_size: Option<u64>,
    /// `bytes.len() / input.len()`, 0.0 for empty input.
    pub ratio: f64,
    pub throughput_mbps: f64,
    pub elapsed: Duration,
}

/// Numbers kept per chunk once its output has been discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkMeasurement {
    pub input_len: usize,
    pub recorded_size: Option<u64>,
    /// Time spent inside the measured codec call.
    pub elapsed: Duration,
    /// Untimed setup work (compressing the frame a decompress run decodes).
    pub prepare: Duration,
}

/// Megabytes per second, with elapsed time floored at `MIN_ELAPSED_SECS`.
pub fn throughput_mbps(bytes: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64().max(MIN_ELAPSED_SECS);
    bytes as f64 / BYTES_PER_MB / secs
}

fn ratio(output_len: usize, input_len: usize) -> f64 {
    if input_len > 0 {
        output_len as f64 / input_len as f64
    } else {
        0.0
    }
}

pub struct CodecAdapter {
    compressor: Box<dyn Compressor>,
    decompressor: Box<dyn Decompressor>,
}

impl CodecAdapter {
    /// Resolve the codec pair. Fails on a level the codec does not accept.
    pub fn new(codec: CodecKind, level: Option<i32>) -> Result<Self, CompressionError> {
        Ok(Self {
            compressor: create_compressor(codec, level)?,
            decompressor: create_decompressor(codec),
        })
    }

    pub fn codec(&self) -> CodecKind {
        self.compressor.codec()
    }

    pub fn process(&mut self, direction: Direction, input: &[u8]) -> Result<ProcessOutput, CompressionError> {
        let mut out = Vec::new();
        let start = Instant::now();
        match direction {
            Direction::Compress => self.compressor.compress_chunk(input, &mut out)?,
            Direction::Decompress => self.decompressor.decompress_chunk(input, &mut out)?,
        }
        let elapsed = start.elapsed();

        let recorded_size = match direction {
            Direction::Compress => Some(self.compressor.recorded_size(out.len())),
            Direction::Decompress => None,
        };

        Ok(ProcessOutput {
            ratio: ratio(out.len(), input.len()),
            throughput_mbps: throughput_mbps(input.len(), elapsed),
            recorded_size,
            elapsed,
            bytes: out,
        })
    }

    /// Measure one raw chunk in the given direction.
    ///
    /// Decompress runs need a frame to decode: the chunk is compressed first
    /// (reported as `prepare`, outside `elapsed`), then decoded and checked
    /// against the original bytes.
    pub fn measure_chunk(&mut self, direction: Direction, chunk: &[u8]) -> Result<ChunkMeasurement, CompressionError> {
        match direction {
            Direction::Compress => {
                let out = self.process(Direction::Compress, chunk)?;
                Ok(ChunkMeasurement {
                    input_len: chunk.len(),
                    recorded_size: out.recorded_size,
                    elapsed: out.elapsed,
                    prepare: Duration::ZERO,
                })
            }
            Direction::Decompress => {
                let start = Instant::now();
                let mut frame = Vec::new();
                self.compressor.compress_chunk(chunk, &mut frame)?;
                let prepare = start.elapsed();

                let out = self.process(Direction::Decompress, &frame)?;
                if out.bytes != chunk {
                    return Err(CompressionError::RoundTripMismatch {
                        codec: self.decompressor.codec(),
                        expected: chunk.len(),
                        actual: out.bytes.len(),
                    });
                }
                Ok(ChunkMeasurement {
                    input_len: frame.len(),
                    recorded_size: None,
                    elapsed: out.elapsed,
                    prepare,
                })
            }
        }
    }
}

/// One-shot form of [`CodecAdapter::process`].
pub fn process(
    codec: CodecKind,
    direction: Direction,
    level: Option<i32>,
    bytes: &[u8],
) -> Result<ProcessOutput, CompressionError> {
    CodecAdapter::new(codec, level)?.process(direction, bytes)
}
