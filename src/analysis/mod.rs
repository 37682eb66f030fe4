//! Function slicing stages.
//!
//! - [`resolver`]: name or address to RVA
//! - [`section_map`]: RVA to a bounded file window in the code section
//! - [`boundary`]: decoded stream to the function's extent
//! - [`pipeline`]: the stages wired together with the reader and decoder

pub mod boundary;
pub mod pipeline;
pub mod resolver;
pub mod section_map;

pub use pipeline::{disassemble_function, FunctionDisassembler};
