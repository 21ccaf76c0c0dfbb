//! Internal error conditions. Parsing itself never fails (any byte sequence
//! has a `Document`); `EditError` exists only so the incremental driver has
//! a named reason to log before it falls back to a full reparse, the way
//! `markdown-neuraxis-engine`'s `io::IoError` names its own `#[from]`
//! wrapped failures.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("edit start {start} is past old_end {old_end}")]
    StartPastOldEnd { start: usize, old_end: usize },

    #[error("edit old_end {old_end} is past old source length {old_len}")]
    OldEndPastSource { old_end: usize, old_len: usize },

    #[error("edit new_end {new_end} is past new source length {new_len}")]
    NewEndPastSource { new_end: usize, new_len: usize },

    #[error("spliced block spans do not tile the new source; falling back to full reparse")]
    CoverageViolation,
}
