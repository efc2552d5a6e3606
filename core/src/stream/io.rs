//! stream/io.rs
//! Input sources and how they are sized, read, and opened.

use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::types::BenchError;

/// Canonical input abstraction
#[derive(Debug, Clone)]
pub enum InputSource {
    File(PathBuf),
    Memory(Bytes),
}

impl InputSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        InputSource::File(path.into())
    }

    pub fn memory(data: impl Into<Bytes>) -> Self {
        InputSource::Memory(data.into())
    }

    /// Source length in bytes. Fails with `FileNotFound` for a missing,
    /// unreadable, or non-regular path.
    pub fn size(&self) -> Result<u64, BenchError> {
        match self {
            InputSource::File(p) => {
                let meta = std::fs::metadata(p).map_err(|e| not_found_or_io(p, e))?;
                if !meta.is_file() {
                    return Err(BenchError::FileNotFound { path: p.clone() });
                }
                Ok(meta.len())
            }
            InputSource::Memory(b) => Ok(b.len() as u64),
        }
    }

    /// Load the whole source.
    pub fn read_all(&self) -> Result<Bytes, BenchError> {
        match self {
            InputSource::File(p) => {
                let data = std::fs::read(p).map_err(|e| not_found_or_io(p, e))?;
                Ok(Bytes::from(data))
            }
            InputSource::Memory(b) => Ok(b.clone()),
        }
    }

    /// Normalize into a boxed reader. The file handle closes when it drops.
    pub fn open(&self) -> Result<Box<dyn Read + Send>, BenchError> {
        let reader: Box<dyn Read + Send> = match self {
            InputSource::File(p) => Box::new(File::open(p).map_err(|e| not_found_or_io(p, e))?),
            InputSource::Memory(b) => Box::new(Cursor::new(b.clone())),
        };
        Ok(reader)
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::File(p) => p.display().to_string(),
            InputSource::Memory(b) => format!("<memory: {} bytes>", b.len()),
        }
    }
}

fn not_found_or_io(path: &Path, e: io::Error) -> BenchError {
    match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            BenchError::FileNotFound { path: path.to_path_buf() }
        }
        _ => BenchError::Io(e),
    }
}
