//! funcscope: disassemble a single function out of a binary module.
//!
//! A function is named by symbol (or mask) or by RVA. The crate resolves it
//! to an RVA, maps that into a capped byte window inside the code section,
//! reads and decodes the window, and trims the decoded stream at the first
//! return instruction.
//!
//! ```no_run
//! use funcscope::{disassemble_function, AddressQuery, SliceConfig};
//!
//! let listing = disassemble_function(
//!     "target.dll",
//!     &AddressQuery::by_name("DllMain"),
//!     &SliceConfig::default(),
//! )?;
//! print!("{}", listing);
//! # Ok::<(), funcscope::FuncScopeError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod core;
pub mod demangle;
pub mod disasm;
pub mod error;
pub mod formats;
pub mod io;
pub mod logging;
pub mod symbols;

pub use analysis::{disassemble_function, FunctionDisassembler};
pub use config::{AddressBase, BackendKind, BoundaryPolicy, SliceConfig};
pub use crate::core::{
    AddressQuery, Bitness, ByteWindow, FunctionListing, InstructionRecord, Module, Section,
    TrimWarning,
};
pub use error::{FuncScopeError, Result};
