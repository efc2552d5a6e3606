//! codecs/gzip.rs
//! gzip (RFC 1952 container) via flate2. Each chunk is its own gzip member.

use std::io::{Read, Write};
use flate2::{Compression, read::GzDecoder, write::GzEncoder};

use crate::compression::constants::{DEFAULT_LEVEL_GZIP, GZIP_LEVELS};
use crate::compression::types::{CodecKind, CompressionError, Compressor, Decompressor, Direction};

pub struct GzipCompressor {
    level: Compression,
}

impl GzipCompressor {
    pub fn new(level: Option<i32>) -> Result<Self, CompressionError> {
        let level = level.unwrap_or(DEFAULT_LEVEL_GZIP);
        if !GZIP_LEVELS.contains(&level) {
            return Err(CompressionError::UnsupportedLevel { codec: CodecKind::Gzip, level });
        }
        Ok(Self { level: Compression::new(level as u32) })
    }
}

impl Compressor for GzipCompressor {
    fn codec(&self) -> CodecKind {
        CodecKind::Gzip
    }

    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let fail = |e: std::io::Error| CompressionError::process(CodecKind::Gzip, Direction::Compress, e);

        let mut enc = GzEncoder::new(std::mem::take(out), self.level);
        enc.write_all(input).map_err(fail)?;
        *out = enc.finish().map_err(fail)?;
        Ok(())
    }
}

pub struct GzipDecompressor;

impl GzipDecompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GzipDecompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Decompressor for GzipDecompressor {
    fn codec(&self) -> CodecKind {
        CodecKind::Gzip
    }

    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut dec = GzDecoder::new(input);
        dec.read_to_end(out)
            .map_err(|e| CompressionError::process(CodecKind::Gzip, Direction::Decompress, e))?;
        Ok(())
    }
}
