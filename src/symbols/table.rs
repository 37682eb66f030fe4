//! In-memory symbol table.

use object::read::{Object, ObjectSymbol};
use std::collections::BTreeSet;
use tracing::debug;

use super::{SymbolMask, SymbolRecord, SymbolSource};
use crate::demangle::demangled_name;

#[derive(Debug, Clone)]
struct Entry {
    record: SymbolRecord,
    demangled: Option<String>,
}

/// Deduplicated list of `(name, rva)` records with their demangled forms.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<Entry>,
}

impl SymbolTable {
    /// Builds a table from records. Exact `(name, rva)` duplicates are
    /// dropped; the first occurrence keeps its position.
    pub fn from_records<I: IntoIterator<Item = SymbolRecord>>(records: I) -> Self {
        let mut seen = BTreeSet::new();
        let entries = records
            .into_iter()
            .filter(|r| seen.insert((r.name.clone(), r.rva)))
            .map(|record| Entry {
                demangled: demangled_name(&record.name),
                record,
            })
            .collect();
        Self { entries }
    }

    /// Collects defined symbols, dynamic symbols and exports of a parsed
    /// object, rebased to RVAs.
    pub fn from_object<'data, O: Object<'data>>(obj: &O) -> Self {
        let base = obj.relative_address_base();
        let to_rva = |va: u64| va.checked_sub(base).filter(|rva| *rva != 0);

        let mut records = Vec::new();
        for sym in obj.symbols().chain(obj.dynamic_symbols()) {
            if !sym.is_definition() {
                continue;
            }
            let (Ok(name), Some(rva)) = (sym.name(), to_rva(sym.address())) else {
                continue;
            };
            if !name.is_empty() {
                records.push(SymbolRecord::new(name, rva));
            }
        }
        if let Ok(exports) = obj.exports() {
            for export in exports {
                let name = String::from_utf8_lossy(export.name());
                if let Some(rva) = to_rva(export.address()) {
                    if !name.is_empty() {
                        records.push(SymbolRecord::new(name, rva));
                    }
                }
            }
        }

        let table = Self::from_records(records);
        debug!(symbols = table.len(), base = base, "Collected module symbols");
        table
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &SymbolRecord> {
        self.entries.iter().map(|e| &e.record)
    }
}

impl SymbolSource for SymbolTable {
    fn lookup(&self, mask: &SymbolMask) -> Vec<SymbolRecord> {
        self.entries
            .iter()
            .filter(|e| {
                mask.matches(&e.record.name)
                    || e.demangled.as_deref().is_some_and(|d| mask.matches(d))
            })
            .map(|e| e.record.clone())
            .collect()
    }
}
