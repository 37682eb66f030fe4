//! Non-fatal outcomes attached to a listing.

use serde::Serialize;
use std::fmt;

/// Non-fatal trimming outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrimWarning {
    /// No distinguishable return inside the decoded window.
    TruncatedFunction { decoded: usize },
}

impl fmt::Display for TrimWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrimWarning::TruncatedFunction { decoded } => write!(
                f,
                "no return found in {} decoded instructions; function may be truncated",
                decoded
            ),
        }
    }
}
