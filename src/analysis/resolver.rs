//! Query-to-RVA resolution.

use tracing::debug;

use crate::core::query::AddressQuery;
use crate::error::{FuncScopeError, Result};
use crate::symbols::{SymbolMask, SymbolSource};

/// Turns a query into a single RVA.
///
/// Addresses pass through unchanged. A name is first looked up literally;
/// only when nothing carries that exact name is it retried as a mask. The
/// chosen lookup must yield exactly one symbol, otherwise the query fails
/// with `AmbiguousOrMissingSymbol`.
pub fn resolve<S: SymbolSource + ?Sized>(query: &AddressQuery, symbols: &S) -> Result<u64> {
    match query {
        AddressQuery::ByAddress(rva) => Ok(*rva),
        AddressQuery::ByName(name) => {
            let exact = SymbolMask::exact(name)?;
            let mut hits = symbols.lookup(&exact);
            if hits.is_empty() && exact.has_wildcards() {
                hits = symbols.lookup(&SymbolMask::new(name)?);
            }
            match hits.as_slice() {
                [only] => {
                    debug!(query = %name, symbol = %only.name, rva = only.rva, "Resolved symbol");
                    Ok(only.rva)
                }
                _ => {
                    debug!(query = %name, matches = hits.len(), "Symbol lookup not unique");
                    Err(FuncScopeError::AmbiguousOrMissingSymbol {
                        query: name.clone(),
                        matches: hits.len(),
                    })
                }
            }
        }
    }
}
