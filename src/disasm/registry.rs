use super::iced::IcedDecoder;
use super::InstructionDecoder;
use crate::config::BackendKind;
use crate::core::instruction::InstructionRecord;
use crate::core::module::Bitness;
use crate::error::{FuncScopeError, Result};

pub enum Backend {
    Iced(IcedDecoder),
    #[cfg(feature = "capstone-backend")]
    Cap(super::capstone::CapstoneDecoder),
}

impl InstructionDecoder for Backend {
    fn decode(&self, bytes: &[u8], bitness: Bitness, base: u64) -> Vec<InstructionRecord> {
        match self {
            Backend::Iced(d) => d.decode(bytes, bitness, base),
            #[cfg(feature = "capstone-backend")]
            Backend::Cap(d) => d.decode(bytes, bitness, base),
        }
    }

    fn name(&self) -> &str {
        match self {
            Backend::Iced(d) => d.name(),
            #[cfg(feature = "capstone-backend")]
            Backend::Cap(d) => d.name(),
        }
    }
}

/// Explicit backend selector. Returns an error if the backend is unavailable.
pub fn for_kind(kind: BackendKind) -> Result<Backend> {
    match kind {
        BackendKind::Iced => Ok(Backend::Iced(IcedDecoder::new())),
        #[cfg(feature = "capstone-backend")]
        BackendKind::Capstone => super::capstone::CapstoneDecoder::new()
            .map(Backend::Cap)
            .ok_or_else(|| {
                FuncScopeError::UnsupportedBackend("capstone failed to initialise".to_string())
            }),
        #[cfg(not(feature = "capstone-backend"))]
        BackendKind::Capstone => Err(FuncScopeError::UnsupportedBackend(
            "capstone support not compiled in".to_string(),
        )),
    }
}
