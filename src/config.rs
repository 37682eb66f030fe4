//! Configuration for function slicing.
//!
//! Defaults reproduce the classic behaviour: a 512-byte window read from
//! `.text`, decoded with iced-x86, trimmed with the legacy boundary rule.

use serde::{Deserialize, Serialize};

use crate::error::{FuncScopeError, Result};

/// Default cap on the number of bytes read for one function.
pub const DEFAULT_MAX_WINDOW: usize = 512;
/// Default name of the code section.
pub const DEFAULT_CODE_SECTION: &str = ".text";

/// How the trimmer treats a return found as the very first instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// A return at index 0 is indistinguishable from "no return found":
    /// the whole decoded stream is kept and a truncation warning raised.
    #[default]
    Legacy,
    /// A return at index 0 ends the function after one instruction.
    Strict,
}

/// Decoder backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Iced,
    Capstone,
}

/// Which address space instruction addresses are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressBase {
    /// Relative to the module base.
    #[default]
    Rva,
    /// `image_base + rva`.
    Va,
}

/// Master configuration for [`crate::analysis::pipeline::FunctionDisassembler`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceConfig {
    /// Maximum number of bytes read for one function.
    pub max_window: usize,
    /// Name of the section the function is looked up in.
    pub code_section: String,
    /// Index-0 return handling.
    pub boundary: BoundaryPolicy,
    /// Decoder backend.
    pub backend: BackendKind,
    /// Address space of emitted instruction addresses.
    pub address_base: AddressBase,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            max_window: DEFAULT_MAX_WINDOW,
            code_section: DEFAULT_CODE_SECTION.to_string(),
            boundary: BoundaryPolicy::default(),
            backend: BackendKind::default(),
            address_base: AddressBase::default(),
        }
    }
}

impl SliceConfig {
    /// Reject settings the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_window == 0 {
            return Err(FuncScopeError::InvalidConfig(
                "max_window must be greater than zero".to_string(),
            ));
        }
        if self.code_section.is_empty() {
            return Err(FuncScopeError::InvalidConfig(
                "code_section must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: SliceConfig = serde_json::from_str(json)
            .map_err(|e| FuncScopeError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| FuncScopeError::InvalidConfig(e.to_string()))
    }
}
