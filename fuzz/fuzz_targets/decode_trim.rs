#![no_main]
use funcscope::analysis::boundary::trim;
use funcscope::disasm::iced::IcedDecoder;
use funcscope::disasm::InstructionDecoder;
use funcscope::{Bitness, BoundaryPolicy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let decoded = IcedDecoder::new().decode(data, Bitness::Bits64, 0);
    let total = decoded.len();
    let (kept, _) = trim(decoded, BoundaryPolicy::Strict);
    assert!(kept.len() <= total);
});
