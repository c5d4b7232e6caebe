//! Workflow error types.
//!
//! The extraction engine itself never errors — it degrades through fallback
//! tiers instead. These errors cover the surrounding workflow conditions:
//! caller input validation, attempt authorization, and storage failures.
//! Defined here so callers can classify errors without string matching.

use thiserror::Error;

/// Errors surfaced by the assessment workflows.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Neither a prompt nor file content was supplied, so there is no
    /// question source. A caller-input-validation condition, not a parser
    /// failure.
    #[error("no questions available: supply a prompt or upload a file")]
    NoQuestionSource,

    /// The referenced assessment does not exist.
    #[error("assessment not found: {0}")]
    AssessmentNotFound(String),

    /// The candidate has already used their single attempt and holds no
    /// retake permission.
    #[error("assessment {assessment_id} already attempted by user {user_id}")]
    AlreadyAttempted {
        assessment_id: String,
        user_id: String,
    },

    /// The record store failed.
    #[error("storage error: {0}")]
    Store(#[from] anyhow::Error),
}

impl WorkflowError {
    /// Returns `true` when the error is the caller's fault (bad input or
    /// unauthorized attempt) rather than a system failure.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, WorkflowError::Store(_))
    }
}
