//! Common test utilities and helpers.
//!
//! Integration tests build small PE images in memory instead of depending on
//! sample binaries being present.

#![allow(dead_code)]

pub mod pe_builder;

use std::io::Write;
use tempfile::NamedTempFile;

pub use pe_builder::PeBuilder;

/// Creates a temporary file with the given content.
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file
}

/// x86-64: push rbp; mov rbp, rsp; pop rbp; ret
pub const X64_TINY_FN: &[u8] = &[0x55, 0x48, 0x89, 0xe5, 0x5d, 0xc3];

/// x86: push ebp; mov ebp, esp; pop ebp; ret
pub const X86_TINY_FN: &[u8] = &[0x55, 0x89, 0xe5, 0x5d, 0xc3];
