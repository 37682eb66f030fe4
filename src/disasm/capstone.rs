use capstone::{Arch, Capstone, Mode, Syntax, NO_EXTRA_MODE};
use tracing::debug;

use super::InstructionDecoder;
use crate::core::instruction::InstructionRecord;
use crate::core::module::Bitness;

/// Capstone x86 decoder. Holds one engine per width.
pub struct CapstoneDecoder {
    cs32: Capstone,
    cs64: Capstone,
}

fn x86_engine(mode: Mode) -> Option<Capstone> {
    let mut cs = Capstone::new_raw(Arch::X86, mode, NO_EXTRA_MODE, None).ok()?;
    cs.set_syntax(Syntax::Intel).ok()?;
    Some(cs)
}

impl CapstoneDecoder {
    pub fn new() -> Option<Self> {
        Some(Self {
            cs32: x86_engine(Mode::Mode32)?,
            cs64: x86_engine(Mode::Mode64)?,
        })
    }
}

impl InstructionDecoder for CapstoneDecoder {
    fn decode(&self, bytes: &[u8], bitness: Bitness, base: u64) -> Vec<InstructionRecord> {
        let cs = match bitness {
            Bitness::Bits32 => &self.cs32,
            Bitness::Bits64 => &self.cs64,
        };
        // disasm_all stops at the first invalid instruction
        let insns = match cs.disasm_all(bytes, base) {
            Ok(insns) => insns,
            Err(e) => {
                debug!(error = %e, "capstone: decode failed");
                return Vec::new();
            }
        };
        insns
            .iter()
            .map(|insn| {
                InstructionRecord::new(
                    insn.address(),
                    insn.bytes().to_vec(),
                    insn.mnemonic().unwrap_or(""),
                    insn.op_str().unwrap_or(""),
                )
            })
            .collect()
    }

    fn name(&self) -> &str {
        "capstone"
    }
}
