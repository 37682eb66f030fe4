//! RVA-to-file-window mapping inside the code section.
//!
//! ```text
//! offset_in_file  = rva - (virtual_address - pointer_to_raw_data)
//! bytes_remaining = size_of_raw_data - (rva - virtual_address)
//! read_length     = min(max_window, bytes_remaining)
//! ```
//!
//! An RVA outside `[virtual_address, virtual_address + size_of_raw_data)` is
//! rejected with `InvalidAddress` instead of producing a negative offset or
//! length.

use tracing::{debug, warn};

use crate::core::module::Module;
use crate::core::section::Section;
use crate::core::window::ByteWindow;
use crate::error::{FuncScopeError, Result};

/// Finds the first section named `code_section` and maps `rva` into it.
pub fn map_rva(
    module: &Module,
    rva: u64,
    code_section: &str,
    max_window: usize,
) -> Result<ByteWindow> {
    let section = module
        .section_by_name(code_section)
        .ok_or_else(|| FuncScopeError::SectionNotFound(code_section.to_string()))?;
    window_in_section(section, rva, max_window)
}

/// Computes the read window for `rva` inside `section`.
pub fn window_in_section(section: &Section, rva: u64, max_window: usize) -> Result<ByteWindow> {
    let invalid = || {
        warn!(rva = rva, section = %section, "RVA outside code section");
        FuncScopeError::InvalidAddress {
            rva,
            section: section.name.clone(),
        }
    };

    let delta = rva.checked_sub(section.virtual_address).ok_or_else(invalid)?;
    let bytes_remaining = section
        .size_of_raw_data
        .checked_sub(delta)
        .filter(|r| *r > 0)
        .ok_or_else(invalid)?;
    let file_offset = section
        .pointer_to_raw_data
        .checked_add(delta)
        .ok_or_else(invalid)?;
    let len = usize::try_from(bytes_remaining).map_or(max_window, |r| r.min(max_window));

    let window = ByteWindow {
        rva,
        file_offset,
        len,
        bytes_remaining,
    };
    debug!(section = %section.name, window = %window, "Mapped RVA");
    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::module::Bitness;

    fn text() -> Section {
        Section::new(".text", 0x1000, 0x200, 0x400)
    }

    #[test]
    fn maps_rva_inside_section() {
        let w = window_in_section(&text(), 0x1010, 512).unwrap();
        assert_eq!(w.file_offset, 0x410);
        assert_eq!(w.bytes_remaining, 0x1f0);
        assert_eq!(w.len, 0x1f0);
        assert!(w.reaches_section_end());
    }

    #[test]
    fn window_is_capped() {
        let big = Section::new(".text", 0x1000, 0x10000, 0x400);
        for rva in [0x1000u64, 0x1234, 0x10dff] {
            let w = window_in_section(&big, rva, 512).unwrap();
            assert!(w.bytes_remaining > 512);
            assert_eq!(w.len, 512);
        }
    }

    #[test]
    fn last_byte_of_section_gives_one_byte_window() {
        let w = window_in_section(&text(), 0x11ff, 512).unwrap();
        assert_eq!(w.len, 1);
        assert_eq!(w.file_offset, 0x5ff);
    }

    #[test]
    fn rva_below_section_is_invalid() {
        let err = window_in_section(&text(), 0xfff, 512).unwrap_err();
        assert!(matches!(err, FuncScopeError::InvalidAddress { rva: 0xfff, .. }));
    }

    #[test]
    fn rva_at_or_past_end_is_invalid() {
        assert!(window_in_section(&text(), 0x1200, 512).is_err());
        assert!(window_in_section(&text(), 0x9000, 512).is_err());
    }

    #[test]
    fn missing_code_section() {
        let m = Module::new("x.dll", Bitness::Bits32, 0x1000_0000, vec![]);
        let err = map_rva(&m, 0x1000, ".text", 512).unwrap_err();
        assert!(matches!(err, FuncScopeError::SectionNotFound(_)));
    }

    #[test]
    fn first_matching_section_is_used() {
        let m = Module::new(
            "x.dll",
            Bitness::Bits64,
            0,
            vec![
                Section::new(".data", 0x3000, 0x200, 0x800),
                text(),
                Section::new(".text", 0x1000, 0x200, 0x900),
            ],
        );
        let w = map_rva(&m, 0x1010, ".text", 512).unwrap();
        assert_eq!(w.file_offset, 0x410);
    }
}
