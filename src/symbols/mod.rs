//! # Symbols Module
//!
//! Name-to-RVA lookup for the address resolver. The resolver only sees the
//! narrow [`SymbolSource`] trait; [`SymbolTable`] is the in-memory
//! implementation, filled from a parsed module or built by hand.

pub mod mask;
pub mod table;
pub mod types;

pub use mask::SymbolMask;
pub use table::SymbolTable;
pub use types::SymbolRecord;

/// Anything that can list the symbols matching a name or mask.
pub trait SymbolSource {
    /// All records whose name matches `mask`, in source order.
    fn lookup(&self, mask: &SymbolMask) -> Vec<SymbolRecord>;
}

impl<S: SymbolSource + ?Sized> SymbolSource for &S {
    fn lookup(&self, mask: &SymbolMask) -> Vec<SymbolRecord> {
        (**self).lookup(mask)
    }
}
