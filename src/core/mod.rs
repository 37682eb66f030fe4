//! Core data types for funcscope.
//!
//! These are the values that flow between the pipeline stages: the loaded
//! [`module::Module`] with its [`section::Section`] table, the caller's
//! [`query::AddressQuery`], the [`window::ByteWindow`] read from disk, and the
//! decoded [`instruction::InstructionRecord`]s that make up a listing.

pub mod instruction;
pub mod module;
pub mod query;
pub mod section;
pub mod warning;
pub mod window;

pub use instruction::{FunctionListing, InstructionRecord};
pub use module::{Bitness, Module};
pub use query::AddressQuery;
pub use section::Section;
pub use warning::TrimWarning;
pub use window::ByteWindow;
