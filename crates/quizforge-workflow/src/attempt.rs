//! Candidate attempt workflows.
//!
//! Starting an attempt hands out a redacted [`AssessmentView`] so the
//! correct option ids and explanations never leave the server side.
//! Submission enforces the one-attempt rule: a second submission requires a
//! retake permission, which is consumed by the submission that uses it.

use quizforge_core::error::WorkflowError;
use quizforge_core::grading::{self, GradingRequest, GradingResult};
use quizforge_core::model::AssessmentView;

use crate::store::AssessmentStore;

/// Fetch the candidate-facing view of an assessment and record the start.
pub fn start_attempt(
    store: &dyn AssessmentStore,
    assessment_id: &str,
    user_id: &str,
) -> Result<AssessmentView, WorkflowError> {
    let assessment = store
        .assessment(assessment_id)?
        .ok_or_else(|| WorkflowError::AssessmentNotFound(assessment_id.to_string()))?;

    store.mark_started(assessment_id, user_id)?;
    tracing::debug!(assessment_id, user_id, "attempt started");

    Ok(assessment.candidate_view())
}

/// Grade a submission and persist the result.
///
/// A candidate who already has a graded attempt must hold a retake
/// permission. The permission is removed when the submission goes through,
/// so each grant covers exactly one extra attempt.
pub fn submit_attempt(
    store: &dyn AssessmentStore,
    request: &GradingRequest,
) -> Result<GradingResult, WorkflowError> {
    let assessment = store
        .assessment(&request.assessment_id)?
        .ok_or_else(|| WorkflowError::AssessmentNotFound(request.assessment_id.clone()))?;

    let prior_attempts = store.attempt_count(&request.assessment_id, &request.user_id)?;
    if prior_attempts > 0 {
        let has_permission = assessment
            .retake_permissions
            .iter()
            .any(|u| u == &request.user_id);
        if !has_permission {
            return Err(WorkflowError::AlreadyAttempted {
                assessment_id: request.assessment_id.clone(),
                user_id: request.user_id.clone(),
            });
        }

        let remaining: Vec<String> = assessment
            .retake_permissions
            .iter()
            .filter(|u| *u != &request.user_id)
            .cloned()
            .collect();
        store.set_retake_permissions(&request.assessment_id, remaining)?;
        tracing::info!(
            assessment_id = %request.assessment_id,
            user_id = %request.user_id,
            "retake permission consumed"
        );
    }

    let result = grading::grade(&assessment, request);
    store.save_result(&result)?;
    tracing::info!(
        assessment_id = %result.assessment_id,
        user_id = %result.user_id,
        score = result.score,
        "attempt graded"
    );

    Ok(result)
}
