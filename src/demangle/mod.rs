//! Demangler helpers for Rust, C++ (Itanium) and MSVC symbols.
//!
//! Used by the symbol table so that a query can name a function by its
//! readable form as well as its raw linker name.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_ITA_MANGLED: Lazy<Regex> = Lazy::new(|| {
    // Itanium (GCC/Clang) ABI, optionally with the extra underscore Mach-O/PE-i386 add
    Regex::new(r#"^_{1,2}Z[a-zA-Z0-9_]"#).expect("valid itanium mangled regex")
});
static RE_MSVC_MANGLED: Lazy<Regex> = Lazy::new(|| {
    // MSVC: ?name@@... or ??0...
    Regex::new(r#"^\?\??[A-Za-z0-9_@\$\?]+@@[A-Za-z0-9_@\$\?]*"#).expect("valid msvc mangled regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolFlavor {
    Rust,
    Itanium,
    Msvc,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemangleResult {
    pub original: String,
    pub demangled: String,
    pub flavor: SymbolFlavor,
}

pub fn detect_flavor(s: &str) -> SymbolFlavor {
    if rustc_demangle::try_demangle(s).is_ok() {
        return SymbolFlavor::Rust;
    }
    if RE_ITA_MANGLED.is_match(s) {
        return SymbolFlavor::Itanium;
    }
    if RE_MSVC_MANGLED.is_match(s) {
        return SymbolFlavor::Msvc;
    }
    SymbolFlavor::Unknown
}

/// Attempt to demangle a single symbol. Returns None when not recognized.
pub fn demangle_one(s: &str) -> Option<DemangleResult> {
    if let Ok(dm) = rustc_demangle::try_demangle(s) {
        // {:#} drops the trailing hash of legacy Rust symbols
        return Some(DemangleResult {
            original: s.to_string(),
            demangled: format!("{:#}", dm),
            flavor: SymbolFlavor::Rust,
        });
    }
    if RE_ITA_MANGLED.is_match(s) {
        let bare = s.strip_prefix('_').filter(|r| r.starts_with("_Z")).unwrap_or(s);
        if let Ok(sym) = cpp_demangle::Symbol::new(bare) {
            return Some(DemangleResult {
                original: s.to_string(),
                demangled: sym.to_string(),
                flavor: SymbolFlavor::Itanium,
            });
        }
    }
    if RE_MSVC_MANGLED.is_match(s) {
        if let Ok(out) = msvc_demangler::demangle(s, msvc_demangler::DemangleFlags::NAME_ONLY) {
            return Some(DemangleResult {
                original: s.to_string(),
                demangled: out,
                flavor: SymbolFlavor::Msvc,
            });
        }
    }
    None
}

/// Readable form of `s`, or None when it is not mangled.
pub fn demangled_name(s: &str) -> Option<String> {
    demangle_one(s)
        .map(|r| r.demangled)
        .filter(|d| d != s)
}
