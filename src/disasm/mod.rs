//! Disassembler adapters.
//!
//! The pipeline decodes through the [`InstructionDecoder`] trait. Backends:
//! - iced-x86 (always available)
//! - capstone (behind the `capstone-backend` feature)

#[cfg(feature = "capstone-backend")]
pub mod capstone;
pub mod iced;
pub mod registry;

use crate::core::instruction::InstructionRecord;
use crate::core::module::Bitness;

/// Decodes a byte buffer into an ordered instruction stream.
pub trait InstructionDecoder {
    /// Decode from offset 0 of `bytes`, numbering instructions from `base`.
    ///
    /// Decoding stops at the end of the buffer or at the first byte sequence
    /// that is not a valid instruction; everything decoded before that point
    /// is returned. An empty result means nothing could be decoded.
    fn decode(&self, bytes: &[u8], bitness: Bitness, base: u64) -> Vec<InstructionRecord>;

    /// Get a human-readable name for this decoder
    fn name(&self) -> &str;
}
