//! Bounded window reads from a module file.
//!
//! [`BoundedReader`] owns the file handle for exactly one request. The handle
//! is released when the reader is dropped, so every exit path (success, short
//! read, or an error further down the pipeline) closes it.

pub mod error;

use crate::core::window::ByteWindow;
use crate::io::error::{IoError, Result};
use bytes::Bytes;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Reads a single capped window from a seekable source.
pub struct BoundedReader<R = File> {
    source: R,
    label: PathBuf,
}

impl BoundedReader<File> {
    /// Opens `path` for reading. The path must name a regular file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(IoError::NotAFile(path.to_path_buf()));
        }
        let file = File::open(path)?;

        debug!(
            path = %path.display(),
            size = metadata.len(),
            "Opened module for bounded reading"
        );

        Ok(Self {
            source: file,
            label: path.to_path_buf(),
        })
    }
}

impl<R: Read + Seek> BoundedReader<R> {
    /// Wraps an already-open source; `label` is only used in log output.
    pub fn from_source(source: R, label: impl Into<PathBuf>) -> Self {
        Self {
            source,
            label: label.into(),
        }
    }

    /// Seeks to `window.file_offset` and reads exactly `window.len` bytes.
    ///
    /// # Errors
    ///
    /// Returns `IoError::TruncatedRead` if the source ends early.
    pub fn read_window(&mut self, window: &ByteWindow) -> Result<Bytes> {
        self.source.seek(SeekFrom::Start(window.file_offset))?;

        let mut buf = Vec::with_capacity(window.len);
        (&mut self.source)
            .take(window.len as u64)
            .read_to_end(&mut buf)?;

        if buf.len() < window.len {
            warn!(
                path = %self.label.display(),
                offset = window.file_offset,
                requested = window.len,
                read = buf.len(),
                "Short read"
            );
            return Err(IoError::TruncatedRead {
                offset: window.file_offset,
                requested: window.len,
                read: buf.len(),
            });
        }

        trace!(
            path = %self.label.display(),
            offset = window.file_offset,
            len = buf.len(),
            "Performed read"
        );

        Ok(Bytes::from(buf))
    }
}

/// Opens `path`, reads `window`, and closes the file before returning.
pub fn read_window<P: AsRef<Path>>(path: P, window: &ByteWindow) -> Result<Bytes> {
    let mut reader = BoundedReader::open(path)?;
    reader.read_window(window)
}
