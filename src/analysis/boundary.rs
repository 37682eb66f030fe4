//! Function end detection on a decoded instruction stream.
//!
//! The decoded window has no length of its own, so the function is taken to
//! end at the first unconditional return. When none is found the whole
//! stream is kept and a [`TrimWarning`] is raised: the read cap was hit
//! before the function ended.
//!
//! Under [`BoundaryPolicy::Legacy`] a return at index 0 is treated exactly
//! like "no return found". [`BoundaryPolicy::Strict`] keeps that single
//! instruction and raises no warning.

use tracing::warn;

use crate::config::BoundaryPolicy;
use crate::core::instruction::InstructionRecord;
use crate::core::warning::TrimWarning;

/// Mnemonics that leave the current routine unconditionally.
const RETURN_MNEMONICS: &[&str] = &["ret", "retn", "retf", "retq", "retfq", "iret", "iretd", "iretq"];

pub fn is_return(insn: &InstructionRecord) -> bool {
    let m = insn.base_mnemonic();
    RETURN_MNEMONICS.iter().any(|r| m.eq_ignore_ascii_case(r))
}

/// Index of the first return instruction, if any.
pub fn find_return(instructions: &[InstructionRecord]) -> Option<usize> {
    instructions.iter().position(is_return)
}

/// Number of leading instructions that make up the function, plus the
/// warning to raise, for a stream of `total` instructions whose first
/// return sits at `ret_index`.
pub fn function_extent(
    ret_index: Option<usize>,
    total: usize,
    policy: BoundaryPolicy,
) -> (usize, Option<TrimWarning>) {
    let truncated = (total, Some(TrimWarning::TruncatedFunction { decoded: total }));
    match (ret_index, policy) {
        (Some(0), BoundaryPolicy::Legacy) => truncated,
        (Some(k), _) => (k + 1, None),
        (None, _) => truncated,
    }
}

/// Trims `instructions` to the function's extent.
pub fn trim(
    mut instructions: Vec<InstructionRecord>,
    policy: BoundaryPolicy,
) -> (Vec<InstructionRecord>, Option<TrimWarning>) {
    let ret_index = find_return(&instructions);
    let (keep, warning) = function_extent(ret_index, instructions.len(), policy);
    instructions.truncate(keep);

    if let Some(w) = &warning {
        warn!(
            ret_at_entry = ret_index == Some(0),
            policy = ?policy,
            "{}",
            w
        );
    }
    (instructions, warning)
}
