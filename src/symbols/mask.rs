//! Symbol name masks.
//!
//! A mask is a name that may contain `*` (any run of characters) and `?`
//! (exactly one character). A mask without wildcards matches one exact name.
//! MSVC decorated names start with `?`, so callers that may receive one
//! should try [`SymbolMask::exact`] before the wildcard form.

use regex::Regex;

use crate::error::{FuncScopeError, Result};

#[derive(Debug, Clone)]
pub struct SymbolMask {
    pattern: String,
    // None for masks without wildcards
    regex: Option<Regex>,
}

impl SymbolMask {
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(FuncScopeError::InvalidMask("empty mask".to_string()));
        }
        if !pattern.contains(['*', '?']) {
            return Ok(Self {
                pattern: pattern.to_string(),
                regex: None,
            });
        }

        let mut re = String::with_capacity(pattern.len() + 8);
        re.push_str("^(?s:");
        let mut literal = String::new();
        for c in pattern.chars() {
            match c {
                '*' | '?' => {
                    re.push_str(&regex::escape(&literal));
                    literal.clear();
                    re.push_str(if c == '*' { ".*" } else { "." });
                }
                _ => literal.push(c),
            }
        }
        re.push_str(&regex::escape(&literal));
        re.push_str(")$");

        let regex = Regex::new(&re).map_err(|e| FuncScopeError::InvalidMask(e.to_string()))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex: Some(regex),
        })
    }

    /// Literal mask: `*` and `?` match only themselves.
    pub fn exact(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(FuncScopeError::InvalidMask("empty mask".to_string()));
        }
        Ok(Self {
            pattern: name.to_string(),
            regex: None,
        })
    }

    pub fn has_wildcards(&self) -> bool {
        self.pattern.contains(['*', '?'])
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_exact(&self) -> bool {
        self.regex.is_none()
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.regex {
            Some(re) => re.is_match(name),
            None => self.pattern == name,
        }
    }
}
