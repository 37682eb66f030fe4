//! Error types for funcscope.
//!
//! Every failure the pipeline can hit is a variant of [`FuncScopeError`].
//! Hard errors propagate to the caller untouched; the truncated-function
//! condition is not an error and lives in [`crate::analysis::boundary`].

use thiserror::Error;

use crate::io::error::IoError;

/// Main error type for funcscope operations.
#[derive(Debug, Error)]
pub enum FuncScopeError {
    /// A name query matched zero or more than one symbol
    #[error("Symbol query '{query}' matched {matches} symbols (expected exactly one)")]
    AmbiguousOrMissingSymbol { query: String, matches: usize },

    /// The file ended before the requested window was filled
    #[error("Truncated read at offset {offset:#x}: requested {requested} bytes, got {read}")]
    TruncatedRead {
        offset: u64,
        requested: usize,
        read: usize,
    },

    /// The decoder produced no instructions for the window
    #[error("Undecodable code at RVA {rva:#x} ({window_len} bytes)")]
    UndecodableCode { rva: u64, window_len: usize },

    /// The RVA does not fall inside the raw data of the code section
    #[error("RVA {rva:#x} is outside section {section}")]
    InvalidAddress { rva: u64, section: String },

    /// No section carries the configured code-section name
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// Binary container could not be parsed
    #[error("Invalid binary format: {0}")]
    InvalidFormat(String),

    /// Module architecture is not x86 or x86-64
    #[error("Unsupported architecture: {0}")]
    UnsupportedArchitecture(String),

    /// Requested decoder backend is not compiled in or failed to initialise
    #[error("Unsupported backend: {0}")]
    UnsupportedBackend(String),

    /// Symbol mask could not be compiled
    #[error("Invalid symbol mask: {0}")]
    InvalidMask(String),

    /// Configuration rejected before use
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Caller input rejected (e.g. path is not a regular file)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for funcscope operations
pub type Result<T> = std::result::Result<T, FuncScopeError>;

impl From<IoError> for FuncScopeError {
    fn from(err: IoError) -> Self {
        match err {
            IoError::TruncatedRead {
                offset,
                requested,
                read,
            } => FuncScopeError::TruncatedRead {
                offset,
                requested,
                read,
            },
            IoError::NotAFile(path) => {
                FuncScopeError::InvalidInput(format!("{} is not a regular file", path.display()))
            }
            IoError::StdIo(e) => FuncScopeError::Io(e),
        }
    }
}
