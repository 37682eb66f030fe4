use iced_x86::{Code, Decoder, DecoderOptions, Formatter, Instruction, IntelFormatter, Mnemonic};
use tracing::trace;

use super::InstructionDecoder;
use crate::core::instruction::InstructionRecord;
use crate::core::module::Bitness;

/// The Intel formatter spells far returns `ret far` (`data64 ret far` with
/// REX.W); report them as `retf` / `retfq` so they classify as returns and
/// agree with capstone.
fn far_return_mnemonic(instr: &Instruction) -> Option<&'static str> {
    if instr.mnemonic() != Mnemonic::Retf {
        return None;
    }
    match instr.code() {
        Code::Retfq | Code::Retfq_imm16 => Some("retfq"),
        _ => Some("retf"),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IcedDecoder;

impl IcedDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl InstructionDecoder for IcedDecoder {
    fn decode(&self, bytes: &[u8], bitness: Bitness, base: u64) -> Vec<InstructionRecord> {
        let mut decoder = Decoder::with_ip(bitness.bits(), bytes, base, DecoderOptions::NONE);
        let mut fmt = IntelFormatter::new();
        let mut out = Vec::new();

        while decoder.can_decode() {
            let start = decoder.position();
            let instr = decoder.decode();
            if instr.is_invalid() {
                trace!(offset = start, "iced: invalid instruction, stopping");
                break;
            }
            let end = start + instr.len();

            let mnemonic = match far_return_mnemonic(&instr) {
                Some(m) => m.to_string(),
                None => {
                    let mut m = String::new();
                    fmt.format_mnemonic(&instr, &mut m);
                    m
                }
            };
            let mut operands = String::new();
            fmt.format_all_operands(&instr, &mut operands);

            out.push(InstructionRecord::new(
                instr.ip(),
                bytes[start..end].to_vec(),
                mnemonic,
                operands,
            ));
        }
        out
    }

    fn name(&self) -> &str {
        "iced-x86"
    }
}
