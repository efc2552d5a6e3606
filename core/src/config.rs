//! config.rs
//! Parameters of one benchmark run.

use crate::compression::{CodecKind, Direction, validate_level};
use crate::constants::{DEFAULT_CHUNK_KB, DEFAULT_WINDOW_SIZE, IN_MEMORY_THRESHOLD, chunk_bytes};
use crate::stream::parallelism::ParallelismProfile;
use crate::types::BenchError;

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub codec: CodecKind,
    pub direction: Direction,
    /// `None` selects the codec's default level.
    pub level: Option<i32>,
    /// Chunk size in KiB; 0 means one chunk per source (or per window).
    pub chunk_kb: usize,
    /// Sources at or below this many bytes are loaded whole.
    pub in_memory_threshold: u64,
    /// Window size for streamed sources. Each window is chunked on its own,
    /// so a window that is not a chunk multiple ends in a short chunk.
    pub window_size: usize,
    pub parallelism: ParallelismProfile,
}

impl BenchConfig {
    pub fn new(codec: CodecKind) -> Self {
        Self {
            codec,
            direction: Direction::Compress,
            level: None,
            chunk_kb: DEFAULT_CHUNK_KB,
            in_memory_threshold: IN_MEMORY_THRESHOLD,
            window_size: DEFAULT_WINDOW_SIZE,
            parallelism: ParallelismProfile::single_threaded(),
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_level(mut self, level: Option<i32>) -> Self {
        self.level = level;
        self
    }

    pub fn with_chunk_kb(mut self, chunk_kb: usize) -> Self {
        self.chunk_kb = chunk_kb;
        self
    }

    /// Override the in-memory threshold and the streaming window size.
    pub fn with_streaming(mut self, in_memory_threshold: u64, window_size: usize) -> Self {
        self.in_memory_threshold = in_memory_threshold;
        self.window_size = window_size;
        self
    }

    pub fn with_parallelism(mut self, parallelism: ParallelismProfile) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Chunk size in bytes (0 = whole input).
    pub fn chunk_size(&self) -> Result<usize, BenchError> {
        chunk_bytes(self.chunk_kb).ok_or_else(|| {
            BenchError::Config(format!("chunk size {} KiB overflows the address space", self.chunk_kb))
        })
    }

    /// Explicit level, else the codec's default.
    pub fn resolved_level(&self) -> Option<i32> {
        self.level.or(self.codec.default_level())
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        self.chunk_size()?;
        if self.window_size == 0 {
            return Err(BenchError::Config("window size must be non-zero".into()));
        }
        if self.parallelism.worker_count == 0 {
            return Err(BenchError::Config("worker count must be at least 1".into()));
        }
        validate_level(self.codec, self.resolved_level())?;
        Ok(())
    }
}
