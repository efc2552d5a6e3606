//! codecs/lz4.rs
//! LZ4 frame format compressor/decompressor.
//!
//! Frame (not block) format, so every chunk carries its own header and end
//! mark and decodes without an out-of-band length. `None` keeps liblz4's
//! default (fast) mode; levels 3 and up switch to the HC compressor.
use std::io::{Read, Write};

use crate::compression::constants::LZ4_LEVELS;
use crate::compression::types::{CodecKind, CompressionError, Compressor, Decompressor, Direction};

pub struct Lz4Compressor {
    level: Option<u32>,
}

pub struct Lz4Decompressor;

impl Lz4Compressor {
    pub fn new(level: Option<i32>) -> Result<Self, CompressionError> {
        match level {
            None => Ok(Self { level: None }),
            Some(l) if LZ4_LEVELS.contains(&l) => Ok(Self { level: Some(l as u32) }),
            Some(l) => Err(CompressionError::UnsupportedLevel { codec: CodecKind::Lz4, level: l }),
        }
    }
}

impl Compressor for Lz4Compressor {
    fn codec(&self) -> CodecKind {
        CodecKind::Lz4
    }

    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let fail = |e: std::io::Error| CompressionError::process(CodecKind::Lz4, Direction::Compress, e);

        let mut builder = lz4::EncoderBuilder::new();
        if let Some(level) = self.level {
            builder.level(level);
        }
        let mut enc = builder.build(std::mem::take(out)).map_err(fail)?;
        enc.write_all(input).map_err(fail)?;
        let (buf, result) = enc.finish();
        result.map_err(fail)?;
        *out = buf;
        Ok(())
    }
}

impl Lz4Decompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Lz4Decompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Decompressor for Lz4Decompressor {
    fn codec(&self) -> CodecKind {
        CodecKind::Lz4
    }

    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let fail = |e: std::io::Error| CompressionError::process(CodecKind::Lz4, Direction::Decompress, e);

        let mut dec = lz4::Decoder::new(input).map_err(fail)?;
        dec.read_to_end(out).map_err(fail)?;
        Ok(())
    }
}
