//! File window covering the start of one function.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bytes to read for a function: `len` bytes at `file_offset`, where
/// `len <= max_window` and `len <= bytes_remaining`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteWindow {
    /// RVA the window starts at
    pub rva: u64,
    pub file_offset: u64,
    pub len: usize,
    /// Raw bytes left in the section from `rva` onward
    pub bytes_remaining: u64,
}

impl ByteWindow {
    /// True when the window stops at the section end rather than the cap.
    pub fn reaches_section_end(&self) -> bool {
        self.len as u64 == self.bytes_remaining
    }
}

impl fmt::Display for ByteWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rva={:#x} offset={:#x} len={:#x}",
            self.rva, self.file_offset, self.len
        )
    }
}
