//! Decoded instruction records and the per-function listing.
//!
//! Records are produced only by a decoder backend and are never modified
//! afterwards; the trimmer only ever keeps a prefix of them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::module::Bitness;
use crate::core::warning::TrimWarning;
use crate::core::window::ByteWindow;

/// One decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstructionRecord {
    /// Address of the first byte (RVA or VA, see `AddressBase`)
    pub address: u64,
    /// Encoded length in bytes
    pub size: usize,
    /// Mnemonic including any prefixes, e.g. `repz ret`
    pub mnemonic: String,
    /// Operand text in the backend's Intel syntax
    pub operands: String,
    /// Raw encoding
    pub bytes: Vec<u8>,
}

impl InstructionRecord {
    pub fn new(
        address: u64,
        bytes: Vec<u8>,
        mnemonic: impl Into<String>,
        operands: impl Into<String>,
    ) -> Self {
        Self {
            address,
            size: bytes.len(),
            mnemonic: mnemonic.into(),
            operands: operands.into(),
            bytes,
        }
    }

    /// Mnemonic with prefixes stripped (`repz ret` -> `ret`).
    pub fn base_mnemonic(&self) -> &str {
        self.mnemonic
            .split_whitespace()
            .last()
            .unwrap_or(self.mnemonic.as_str())
    }

    /// Instruction text without address or bytes.
    pub fn text(&self) -> String {
        if self.operands.is_empty() {
            self.mnemonic.clone()
        } else {
            format!("{} {}", self.mnemonic, self.operands)
        }
    }
}

impl fmt::Display for InstructionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#010x}: {:<30} {}",
            self.address,
            hex::encode(&self.bytes),
            self.text()
        )
    }
}

/// Result of slicing one function out of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionListing {
    /// RVA the query resolved to
    pub rva: u64,
    pub bitness: Bitness,
    pub image_base: u64,
    /// Window that was read and decoded
    pub window: ByteWindow,
    /// Trimmed instruction sequence (a prefix of the decoded stream)
    pub instructions: Vec<InstructionRecord>,
    /// Set when no function end was identified inside the window
    pub warning: Option<TrimWarning>,
}

impl FunctionListing {
    pub fn is_truncated(&self) -> bool {
        self.warning.is_some()
    }

    /// Total encoded size of the kept instructions.
    pub fn code_size(&self) -> usize {
        self.instructions.iter().map(|i| i.size).sum()
    }
}

impl fmt::Display for FunctionListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for insn in &self.instructions {
            writeln!(f, "{}", insn)?;
        }
        if let Some(w) = &self.warning {
            writeln!(f, "; warning: {}", w)?;
        }
        Ok(())
    }
}
