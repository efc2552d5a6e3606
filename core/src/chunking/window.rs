//! chunking/window.rs
//! Bounded-window reader.
//!
//! Reads a source in windows of at most `window_size` bytes. A window is
//! only short at end of input. One fresh buffer per window, so once the
//! caller drops a window (and every chunk sliced from it) that memory is
//! released before the next read.
use std::io::{self, Read};
use std::num::NonZeroUsize;

use bytes::Bytes;

/// Fill up to `len` bytes, stopping early only at EOF.
pub fn read_exact_or_eof<R: Read>(r: &mut R, len: usize) -> io::Result<Bytes> {
    let mut buf = vec![0u8; len];
    let mut off = 0;

    while off < len {
        match r.read(&mut buf[off..]) {
            Ok(0) => break,
            Ok(n) => off += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    buf.truncate(off);
    Ok(Bytes::from(buf))
}

#[derive(Debug)]
pub struct WindowReader<R: Read> {
    inner: R,
    window_size: usize,
    windows_read: u64,
    peak_window: usize,
    done: bool,
}

impl<R: Read> WindowReader<R> {
    pub fn new(inner: R, window_size: NonZeroUsize) -> Self {
        Self {
            inner,
            window_size: window_size.get(),
            windows_read: 0,
            peak_window: 0,
            done: false,
        }
    }

    /// Next window, or `Ok(None)` at end of input.
    pub fn next_window(&mut self) -> io::Result<Option<Bytes>> {
        if self.done {
            return Ok(None);
        }
        let window = read_exact_or_eof(&mut self.inner, self.window_size)?;
        if window.len() < self.window_size {
            self.done = true;
        }
        if window.is_empty() {
            return Ok(None);
        }
        self.windows_read += 1;
        self.peak_window = self.peak_window.max(window.len());
        Ok(Some(window))
    }

    pub fn windows_read(&self) -> u64 {
        self.windows_read
    }

    /// Largest window handed out so far.
    pub fn peak_window(&self) -> usize {
        self.peak_window
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Iterator for WindowReader<R> {
    type Item = io::Result<Bytes>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_window() {
            Ok(Some(w)) => Some(Ok(w)),
            Ok(None) => None,
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
