//! Section headers as seen by the section mapper.
//!
//! A section has two independent placements: where it lands once mapped
//! (`virtual_address`, relative to the module base) and where its bytes sit
//! in the file (`pointer_to_raw_data`, `size_of_raw_data`).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    /// Section name, e.g. `.text`
    pub name: String,
    /// RVA of the first byte once mapped
    pub virtual_address: u64,
    /// Number of bytes backed by the file
    pub size_of_raw_data: u64,
    /// File offset of the first raw byte
    pub pointer_to_raw_data: u64,
}

impl Section {
    pub fn new(
        name: impl Into<String>,
        virtual_address: u64,
        size_of_raw_data: u64,
        pointer_to_raw_data: u64,
    ) -> Self {
        Self {
            name: name.into(),
            virtual_address,
            size_of_raw_data,
            pointer_to_raw_data,
        }
    }

    /// True when `rva` falls inside the file-backed part of the section.
    pub fn contains_rva(&self, rva: u64) -> bool {
        rva >= self.virtual_address
            && rva - self.virtual_address < self.size_of_raw_data
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rva={:#x} raw={:#x}+{:#x}",
            self.name, self.virtual_address, self.pointer_to_raw_data, self.size_of_raw_data
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_rva_bounds() {
        let s = Section::new(".text", 0x1000, 0x200, 0x400);
        assert!(!s.contains_rva(0xfff));
        assert!(s.contains_rva(0x1000));
        assert!(s.contains_rva(0x11ff));
        assert!(!s.contains_rva(0x1200));
    }

    #[test]
    fn test_empty_section_contains_nothing() {
        let s = Section::new(".bss", 0x3000, 0, 0);
        assert!(!s.contains_rva(0x3000));
    }

    #[test]
    fn test_display() {
        let s = Section::new(".text", 0x1000, 0x200, 0x400);
        assert_eq!(s.to_string(), ".text rva=0x1000 raw=0x400+0x200");
    }
}
