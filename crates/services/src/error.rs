//! Shared error types for the services crate.

use thiserror::Error;

use mcq_core::model::OPTION_COUNT;

/// Errors emitted by quiz sessions.
///
/// Every variant is a recoverable precondition violation; a rejected
/// operation leaves the session unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// The topic filter selected zero questions; no session was started.
    #[error("no questions available for this selection")]
    Empty,

    /// The session has already run through all of its questions.
    #[error("session already completed")]
    Completed,

    /// `select_option` after the current slot's answer was already submitted.
    #[error("answer already submitted for this question")]
    AlreadySubmitted,

    /// `advance` before the current slot has a submitted answer.
    #[error("current question has no submitted answer yet")]
    NotSubmitted,

    /// An option index outside `0..OPTION_COUNT`.
    #[error("option index {index} out of range (0..{OPTION_COUNT})")]
    OptionOutOfRange { index: usize },
}
