//! compression/types.rs
//! Codec identifiers, run direction, errors, and the per-chunk codec traits.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::constants::{DEFAULT_LEVEL_DPZIP, DEFAULT_LEVEL_GZIP, DEFAULT_LEVEL_ZSTD};

/// The closed set of codecs a run can select. Exactly one is active per run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    Gzip,
    Zstd,
    Lz4,
    /// Simulated hardware codec: zstd output, estimated size.
    Dpzip,
}

impl CodecKind {
    pub const ALL: [CodecKind; 4] = [CodecKind::Gzip, CodecKind::Zstd, CodecKind::Lz4, CodecKind::Dpzip];

    pub fn name(&self) -> &'static str {
        match self {
            CodecKind::Gzip  => "gzip",
            CodecKind::Zstd  => "zstd",
            CodecKind::Lz4   => "lz4",
            CodecKind::Dpzip => "dpzip",
        }
    }

    /// Level used when the caller passes `None`.
    /// `None` here means the codec library picks its own default.
    pub fn default_level(&self) -> Option<i32> {
        match self {
            CodecKind::Gzip  => Some(DEFAULT_LEVEL_GZIP),
            CodecKind::Zstd  => Some(DEFAULT_LEVEL_ZSTD),
            CodecKind::Dpzip => Some(DEFAULT_LEVEL_DPZIP),
            CodecKind::Lz4   => None,
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodecKind {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gzip"  => Ok(CodecKind::Gzip),
            "zstd"  => Ok(CodecKind::Zstd),
            "lz4"   => Ok(CodecKind::Lz4),
            "dpzip" => Ok(CodecKind::Dpzip),
            _ => Err(CompressionError::UnknownCodec { name: s.to_string() }),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Compress,
    Decompress,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Compress   => f.write_str("compress"),
            Direction::Decompress => f.write_str("decompress"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("unknown codec: {name:?} (expected gzip, zstd, lz4 or dpzip)")]
    UnknownCodec { name: String },

    #[error("codec {codec} does not support level {level}")]
    UnsupportedLevel { codec: CodecKind, level: i32 },


    #[error("codec {codec} {direction} failed: {msg}")]
    CodecProcessFailed { codec: CodecKind, direction: Direction, msg: String },

    #[error("codec {codec} round-trip mismatch: expected {expected} bytes, got {actual}")]
    RoundTripMismatch { codec: CodecKind, expected: usize, actual: usize },

    #[error("chunk worker panicked: {msg}")]
    WorkerPanicked { msg: String },
}

impl CompressionError {
    pub(crate) fn process(codec: CodecKind, direction: Direction, e: impl fmt::Display) -> Self {
        CompressionError::CodecProcessFailed { codec, direction, msg: e.to_string() }
    }
}

// Require Send so trait objects can cross into worker threads.
pub trait Compressor: Send {
    fn codec(&self) -> CodecKind;

    /// Compress one chunk as a self-contained frame, appending to `out`.
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;

    /// Size to record for a chunk whose real output is `output_len` bytes.
    fn recorded_size(&self, output_len: usize) -> u64 {
        output_len as u64
    }
}

pub trait Decompressor: Send {
    fn codec(&self) -> CodecKind;

    /// Decompress one self-contained frame, appending to `out`.
    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
