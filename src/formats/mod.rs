//! Binary container parsing.
//!
//! The pipeline only needs a module's width, image base and section table,
//! plus a symbol source. [`ModuleLoader`] is that seam; [`ObjectModuleLoader`]
//! implements it on top of the `object` crate for PE (exact section headers)
//! and, through the generic object API, ELF and Mach-O.

pub mod sections;

use memmap2::Mmap;
use object::read::pe::{PeFile32, PeFile64};
use object::read::Object;
use object::{BinaryFormat, FileKind};
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::module::{Bitness, Module};
use crate::error::{FuncScopeError, Result};
use crate::symbols::{SymbolSource, SymbolTable};

/// Loads a module and its symbols from a path.
pub trait ModuleLoader {
    type Symbols: SymbolSource;

    fn load(&self, path: &Path) -> Result<(Module, Self::Symbols)>;
}

/// `object`-backed loader. Stateless: each call maps and parses the file anew.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectModuleLoader;

impl ModuleLoader for ObjectModuleLoader {
    type Symbols = SymbolTable;

    fn load(&self, path: &Path) -> Result<(Module, SymbolTable)> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(FuncScopeError::InvalidInput(format!(
                "{} is not a regular file",
                path.display()
            )));
        }
        let size = metadata.len();
        debug!(path = %path.display(), size = size, "Loading module");

        // memmap cannot map empty files
        if size == 0 {
            return Err(FuncScopeError::InvalidFormat("empty file".to_string()));
        }
        let file = File::open(path)?;
        // Safety: The file is backed by a real file on disk and we only request a read-only map.
        let map = unsafe { Mmap::map(&file)? };
        parse_module(path, &map)
    }
}

/// Parses an in-memory image. `path` is recorded on the module for the reader.
pub fn parse_module(path: &Path, data: &[u8]) -> Result<(Module, SymbolTable)> {
    let kind = FileKind::parse(data).map_err(|e| FuncScopeError::InvalidFormat(e.to_string()))?;
    match kind {
        FileKind::Pe32 => {
            let pe = PeFile32::parse(data).map_err(invalid_format)?;
            build(path, BinaryFormat::Pe, &pe, sections::pe_sections(&pe))
        }
        FileKind::Pe64 => {
            let pe = PeFile64::parse(data).map_err(invalid_format)?;
            build(path, BinaryFormat::Pe, &pe, sections::pe_sections(&pe))
        }
        _ => {
            let obj = object::File::parse(data).map_err(invalid_format)?;
            build(path, obj.format(), &obj, sections::object_sections(&obj))
        }
    }
}

fn invalid_format(e: object::Error) -> FuncScopeError {
    FuncScopeError::InvalidFormat(e.to_string())
}

fn bitness_of(arch: object::Architecture) -> Result<Bitness> {
    use object::Architecture as A;
    match arch {
        A::I386 => Ok(Bitness::Bits32),
        A::X86_64 | A::X86_64_X32 => Ok(Bitness::Bits64),
        other => {
            warn!(arch = ?other, "Module is not x86 code");
            Err(FuncScopeError::UnsupportedArchitecture(format!("{:?}", other)))
        }
    }
}

fn build<'data, O: Object<'data>>(
    path: &Path,
    format: BinaryFormat,
    obj: &O,
    sections: Vec<crate::core::section::Section>,
) -> Result<(Module, SymbolTable)> {
    let bitness = bitness_of(obj.architecture())?;
    let image_base = obj.relative_address_base();
    let symbols = SymbolTable::from_object(obj);
    debug!(
        format = ?format,
        bitness = %bitness,
        image_base = image_base,
        sections = sections.len(),
        "Parsed module"
    );
    Ok((Module::new(path, bitness, image_base, sections), symbols))
}
