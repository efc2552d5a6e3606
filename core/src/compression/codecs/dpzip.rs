//! codecs/dpzip.rs
//! Simulated hardware codec.
//!
//! Bytes are produced by the zstd engine and returned untouched; only the
//! size recorded for metrics goes through the estimator. Callers must record
//! `recorded_size(len)`, never `len` itself.

use crate::compression::codecs::zstd::{ZstdCompressor, ZstdDecompressor, resolve_zstd_level};
use crate::compression::estimator::SizeEstimationTable;
use crate::compression::types::{CodecKind, CompressionError, Compressor, Decompressor};

pub struct DpzipCompressor {
    engine: ZstdCompressor,
    table: SizeEstimationTable,
}

impl DpzipCompressor {
    pub fn new(level: Option<i32>) -> Result<Self, CompressionError> {
        let level = resolve_zstd_level(CodecKind::Dpzip, level)?;
        Ok(Self {
            engine: ZstdCompressor::with_level(level),
            table: SizeEstimationTable::dpzip(),
        })
    }
}

impl Compressor for DpzipCompressor {
    fn codec(&self) -> CodecKind {
        CodecKind::Dpzip
    }

    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        self.engine.compress_as(CodecKind::Dpzip, input, out)
    }

    fn recorded_size(&self, output_len: usize) -> u64 {
        self.table.estimate(output_len as u64)
    }
}

/// dpzip output is a zstd frame.
pub struct DpzipDecompressor(ZstdDecompressor);

impl DpzipDecompressor {
    pub fn new() -> Self {
        Self(ZstdDecompressor::for_codec(CodecKind::Dpzip))
    }
}

impl Default for DpzipDecompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Decompressor for DpzipDecompressor {
    fn codec(&self) -> CodecKind {
        CodecKind::Dpzip
    }

    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        self.0.decompress_chunk(input, out)
    }
}
