//! Symbol types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named location inside a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub name: String,
    pub rva: u64,
}

impl SymbolRecord {
    pub fn new(name: impl Into<String>, rva: u64) -> Self {
        Self {
            name: name.into(),
            rva,
        }
    }
}

impl fmt::Display for SymbolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:#x}", self.name, self.rva)
    }
}
