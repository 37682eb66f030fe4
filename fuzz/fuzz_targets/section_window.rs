#![no_main]
use funcscope::analysis::section_map::window_in_section;
use funcscope::Section;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u64, u64, u64, u64, u16)| {
    let (va, size, raw, rva, cap) = input;
    let section = Section::new(".text", va, size, raw);
    if let Ok(w) = window_in_section(&section, rva, cap as usize + 1) {
        assert!(w.len <= cap as usize + 1);
        assert!(w.len as u64 <= w.bytes_remaining);
        assert!(section.contains_rva(rva));
    }
});
