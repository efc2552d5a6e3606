//! compression/registry.rs
//! Codec registry and factory functions.
//!
//! Dispatch happens once per adapter: the codec kind is resolved to a boxed
//! compressor/decompressor pair, and levels are validated at that point.

use crate::compression::codecs::{
    DpzipCompressor, DpzipDecompressor, GzipCompressor, GzipDecompressor, Lz4Compressor,
    Lz4Decompressor, ZstdCompressor, ZstdDecompressor,
};
use crate::compression::types::{CodecKind, CompressionError, Compressor, Decompressor};

pub fn create_compressor(codec: CodecKind, level: Option<i32>)
    -> Result<Box<dyn Compressor>, CompressionError>
{
    Ok(match codec {
        CodecKind::Gzip  => Box::new(GzipCompressor::new(level)?),
        CodecKind::Zstd  => Box::new(ZstdCompressor::new(level)?),
        CodecKind::Lz4   => Box::new(Lz4Compressor::new(level)?),
        CodecKind::Dpzip => Box::new(DpzipCompressor::new(level)?),
    })
}

pub fn create_decompressor(codec: CodecKind) -> Box<dyn Decompressor> {
    match codec {
        CodecKind::Gzip  => Box::new(GzipDecompressor::new()),
        CodecKind::Zstd  => Box::new(ZstdDecompressor::new()),
        CodecKind::Lz4   => Box::new(Lz4Decompressor::new()),
        CodecKind::Dpzip => Box::new(DpzipDecompressor::new()),
    }
}

/// Check that `level` is usable with `codec` without keeping the compressor.
pub fn validate_level(codec: CodecKind, level: Option<i32>) -> Result<(), CompressionError> {
    create_compressor(codec, level).map(|_| ())
}
