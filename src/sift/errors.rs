//! Error types for the sift engine and its history
//!
//! This module defines [`SiftError`]. Under normal use the engine is total:
//! the only variants a well-behaved driver sees are [`SiftError::NothingToDo`]
//! (stepping an idle engine) and [`SiftError::IndexOutOfRange`] (reading a
//! history slot that does not exist).
//!
//! [`SiftError::InvariantViolation`] means the engine observed state it can
//! never construct on its own. It aborts the run.

use thiserror::Error;

/// Errors raised by [`SiftEngine`](super::engine::SiftEngine) and
/// [`StepHistory`](crate::history::StepHistory)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiftError {
    /// `step()` was called while the engine is idle
    #[error("Nothing to do: no run in progress")]
    NothingToDo,

    /// History access outside `[0, len)`
    #[error("History index {index} out of range (history has {len} record(s))")]
    IndexOutOfRange { index: usize, len: usize },

    /// Internal state the engine never produces by itself
    #[error("Engine invariant violated: {message}")]
    InvariantViolation { message: String },

    /// Heap order string that is neither max nor min
    #[error("Unknown heap order '{0}' (expected 'max' or 'min')")]
    UnknownOrder(String),
}

impl SiftError {
    /// Create an invariant violation error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }
}
