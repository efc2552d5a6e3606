//! src/compression/codecs/zstd.rs
//!
//! Zstd single-frame compressor/decompressor.
//!
//! Design notes:
//! - Uses the bulk API so every chunk is a standalone frame, single-threaded.
//! - Decoding goes through the streaming decoder so the frame does not need
//!   a known content size.

use crate::compression::constants::DEFAULT_LEVEL_ZSTD;
use crate::compression::types::{CodecKind, CompressionError, Compressor, Decompressor, Direction};

/// Validate a zstd level against what the linked libzstd accepts.
pub(crate) fn resolve_zstd_level(codec: CodecKind, level: Option<i32>) -> Result<i32, CompressionError> {
    let level = level.unwrap_or(DEFAULT_LEVEL_ZSTD);
    if !zstd::compression_level_range().contains(&level) {
        return Err(CompressionError::UnsupportedLevel { codec, level });
    }
    Ok(level)
}

pub struct ZstdCompressor {
    level: i32,
}

impl ZstdCompressor {
    pub fn new(level: Option<i32>) -> Result<Self, CompressionError> {
        Ok(Self { level: resolve_zstd_level(CodecKind::Zstd, level)? })
    }

    /// Compress into `out`, reporting failures under `codec`'s name.
    pub(crate) fn compress_as(
        &self,
        codec: CodecKind,
        input: &[u8],
        out: &mut Vec<u8>,
    ) -> Result<(), CompressionError> {
        let compressed = zstd::bulk::compress(input, self.level)
            .map_err(|e| CompressionError::process(codec, Direction::Compress, e))?;
        out.extend_from_slice(&compressed);
        Ok(())
    }

    pub(crate) fn with_level(level: i32) -> Self {
        Self { level }
    }
}

impl Compressor for ZstdCompressor {
    fn codec(&self) -> CodecKind {
        CodecKind::Zstd
    }

    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        self.compress_as(CodecKind::Zstd, input, out)
    }
}

/// Zstd frame decoder. `codec` is carried so dpzip failures name dpzip.
pub struct ZstdDecompressor {
    codec: CodecKind,
}

impl ZstdDecompressor {
    pub fn new() -> Self {
        Self { codec: CodecKind::Zstd }
    }

    pub(crate) fn for_codec(codec: CodecKind) -> Self {
        Self { codec }
    }
}

impl Default for ZstdDecompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Decompressor for ZstdDecompressor {
    fn codec(&self) -> CodecKind {
        self.codec
    }

    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let decoded = zstd::stream::decode_all(input)
            .map_err(|e| CompressionError::process(self.codec, Direction::Decompress, e))?;
        out.extend_from_slice(&decoded);
        Ok(())
    }
}
