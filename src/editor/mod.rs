//! Editing protocol for elements and modifier lists.
//!
//! All edits are pure: each operation takes the current state plus an intent
//! and returns the next state, never mutating its input. The host (the TUI's
//! [`Session`]) owns the single canonical copy and replaces it after every
//! successful edit.

pub mod list;
pub mod scope;
pub mod session;

pub use list::{EntryEdit, ScopeEntryEdit};
pub use session::{ListRef, Session};

use std::fmt;

/// A failed edit intent.
///
/// All errors are local and non-fatal: they indicate a caller programming
/// error (the UI validates indices and kinds before presenting them), so the
/// caller corrects its input and re-invokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// remove/edit/reorder given an index outside the current bounds
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Current list length
        len: usize,
    },
    /// add/edit given a kind that is not legal in the current context
    InvalidKind {
        /// What was requested and why it is illegal
        detail: String,
    },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
            Self::InvalidKind { detail } => write!(f, "invalid kind: {detail}"),
        }
    }
}

impl std::error::Error for EditError {}

/// Shorthand result for edit operations.
pub type EditResult<T> = Result<T, EditError>;
