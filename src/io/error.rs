//! Custom error types for the I/O module.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error(
        "Read at offset {offset:#x} returned {read} bytes, fewer than the {requested} requested."
    )]
    TruncatedRead {
        offset: u64,
        requested: usize,
        read: usize,
    },

    #[error("{0} is not a regular file.")]
    NotAFile(PathBuf),

    #[error("An underlying I/O error occurred.")]
    StdIo(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IoError>;
