//! End-to-end slicing of one function.
//!
//! resolve -> map -> read -> decode -> trim. Every stage is synchronous and
//! nothing is cached between calls: the module is reparsed and the file
//! reopened for each request.

use std::path::Path;
use tracing::{debug, info_span};

use crate::analysis::{boundary, resolver, section_map};
use crate::config::{AddressBase, SliceConfig};
use crate::core::instruction::FunctionListing;
use crate::core::query::AddressQuery;
use crate::disasm::registry::{self, Backend};
use crate::disasm::InstructionDecoder;
use crate::error::{FuncScopeError, Result};
use crate::formats::{ModuleLoader, ObjectModuleLoader};
use crate::io::BoundedReader;

/// Slices functions out of modules with an injected loader and decoder.
pub struct FunctionDisassembler<L = ObjectModuleLoader, D = Backend> {
    loader: L,
    decoder: D,
    config: SliceConfig,
}

impl FunctionDisassembler<ObjectModuleLoader, Backend> {
    /// `object` loader plus the backend named in `config`.
    pub fn new(config: SliceConfig) -> Result<Self> {
        let decoder = registry::for_kind(config.backend)?;
        Self::with_parts(ObjectModuleLoader, decoder, config)
    }
}

impl<L: ModuleLoader, D: InstructionDecoder> FunctionDisassembler<L, D> {
    pub fn with_parts(loader: L, decoder: D, config: SliceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            loader,
            decoder,
            config,
        })
    }

    pub fn config(&self) -> &SliceConfig {
        &self.config
    }

    /// Slices the function identified by `query` out of the module at `path`.
    pub fn disassemble(&self, path: &Path, query: &AddressQuery) -> Result<FunctionListing> {
        let span = info_span!("disassemble_function", path = %path.display(), query = %query);
        let _guard = span.enter();

        let (module, symbols) = self.loader.load(path)?;
        let rva = resolver::resolve(query, &symbols)?;
        let window = section_map::map_rva(
            &module,
            rva,
            &self.config.code_section,
            self.config.max_window,
        )?;

        // the reader (and its file handle) is dropped at the end of this block
        let bytes = {
            let mut reader = BoundedReader::open(&module.path)?;
            reader.read_window(&window)?
        };

        let base = match self.config.address_base {
            AddressBase::Rva => rva,
            AddressBase::Va => module.image_base.wrapping_add(rva),
        };
        let decoded = self.decoder.decode(&bytes, module.bitness, base);
        debug!(
            decoder = self.decoder.name(),
            decoded = decoded.len(),
            window = %window,
            section_end = window.reaches_section_end(),
            "Decoded window"
        );
        if decoded.is_empty() {
            return Err(FuncScopeError::UndecodableCode {
                rva,
                window_len: window.len,
            });
        }

        let (instructions, warning) = boundary::trim(decoded, self.config.boundary);
        Ok(FunctionListing {
            rva,
            bitness: module.bitness,
            image_base: module.image_base,
            window,
            instructions,
            warning,
        })
    }
}

/// One-shot convenience wrapper around [`FunctionDisassembler`].
pub fn disassemble_function(
    path: impl AsRef<Path>,
    query: &AddressQuery,
    config: &SliceConfig,
) -> Result<FunctionListing> {
    FunctionDisassembler::new(config.clone())?.disassemble(path.as_ref(), query)
}
