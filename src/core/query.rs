//! Caller-supplied function identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the function to slice: either a symbol name (or mask) or an RVA.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressQuery {
    ByName(String),
    ByAddress(u64),
}

impl AddressQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        AddressQuery::ByName(name.into())
    }

    pub fn by_address(rva: u64) -> Self {
        AddressQuery::ByAddress(rva)
    }

    /// Parse command-line style input: `0x`-prefixed hex is an address,
    /// anything else is a name.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            if let Ok(rva) = u64::from_str_radix(hex, 16) {
                return AddressQuery::ByAddress(rva);
            }
        }
        AddressQuery::ByName(trimmed.to_string())
    }
}

impl From<u64> for AddressQuery {
    fn from(rva: u64) -> Self {
        AddressQuery::ByAddress(rva)
    }
}

impl From<&str> for AddressQuery {
    fn from(name: &str) -> Self {
        AddressQuery::ByName(name.to_string())
    }
}

impl fmt::Display for AddressQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressQuery::ByName(n) => write!(f, "{}", n),
            AddressQuery::ByAddress(a) => write!(f, "{:#x}", a),
        }
    }
}
