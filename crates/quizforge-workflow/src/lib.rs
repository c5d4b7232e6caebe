//! quizforge-workflow — Assessment creation and attempt workflows.
//!
//! Calls the extraction engine, persists assessments through the
//! [`store::AssessmentStore`] black box, enforces the one-attempt rule with
//! retake permissions, and aggregates admin analytics.

pub mod analytics;
pub mod attempt;
pub mod create;
pub mod store;
