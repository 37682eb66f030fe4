//! Loaded binary module: path, width, image base and section table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::core::section::Section;

/// Decoding width of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bitness {
    Bits32,
    Bits64,
}

impl Bitness {
    pub fn bits(&self) -> u32 {
        match self {
            Bitness::Bits32 => 32,
            Bitness::Bits64 => 64,
        }
    }
}

impl fmt::Display for Bitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// A parsed module. Built fresh for every request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub path: PathBuf,
    pub bitness: Bitness,
    /// Preferred load address; instruction VAs are `image_base + rva`
    pub image_base: u64,
    /// Sections in file order
    pub sections: Vec<Section>,
}

impl Module {
    pub fn new(
        path: impl Into<PathBuf>,
        bitness: Bitness,
        image_base: u64,
        sections: Vec<Section>,
    ) -> Self {
        Self {
            path: path.into(),
            bitness,
            image_base,
            sections,
        }
    }

    /// First section called `name`. Duplicates after it are ignored.
    pub fn section_by_name(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}
