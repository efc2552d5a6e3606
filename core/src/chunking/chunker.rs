//! chunking/chunker.rs
//! Fixed-size chunking over an in-memory buffer.
//!
//! Chunks are `Bytes` slices sharing the source allocation, so producing
//! them never copies. Empty input yields no chunks, so codecs never see an
//! empty buffer from the driver.
use bytes::Bytes;

/// Lazy iterator over `chunk_size`-byte slices of a buffer.
/// Cloning restarts from the clone's current position; [`Chunks::restart`]
/// rewinds to the first chunk.
#[derive(Clone, Debug)]
pub struct Chunks {
    data: Bytes,
    chunk_size: usize,
    offset: usize,
}

impl Chunks {
    /// `chunk_size == 0` yields the whole buffer as one chunk.
    pub fn new(data: Bytes, chunk_size: usize) -> Self {
        let chunk_size = if chunk_size == 0 { data.len() } else { chunk_size };
        Self { data, chunk_size, offset: 0 }
    }

    pub fn restart(&mut self) {
        self.offset = 0;
    }

    /// Total chunks over the whole buffer: `ceil(len / chunk_size)`.
    pub fn chunk_count(&self) -> usize {
        if self.data.is_empty() {
            0
        } else {
            self.data.len().div_ceil(self.chunk_size)
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Iterator for Chunks {
    type Item = Bytes;

    fn next(&mut self) -> Option<Bytes> {
        if self.offset >= self.data.len() {
            return None;
        }
        let end = self.offset.saturating_add(self.chunk_size).min(self.data.len());
        let chunk = self.data.slice(self.offset..end);
        self.offset = end;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len().saturating_sub(self.offset);
        let n = if remaining == 0 { 0 } else { remaining.div_ceil(self.chunk_size) };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Chunks {}

/// Chunk a buffer at `chunk_kb` KiB granularity. A size past `usize::MAX`
/// bytes is larger than any buffer, so it saturates to one chunk.
pub fn chunk_bytes_kb(data: impl Into<Bytes>, chunk_kb: usize) -> Chunks {
    Chunks::new(data.into(), chunk_kb.saturating_mul(1024))
}
