//! Assessment creation workflow.
//!
//! Invokes the question engine, applies the global per-question time
//! override, and persists the resulting assessment. Decoding uploaded files
//! into plain text is the transport layer's responsibility; this workflow
//! receives text that is already decoded (an empty string signals a decode
//! failure upstream and still routes to the parsing path).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quizforge_core::engine::QuestionEngine;
use quizforge_core::error::WorkflowError;
use quizforge_core::model::Assessment;

use crate::store::AssessmentStore;

/// Everything an examiner submits when creating an assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssessmentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_by: String,
    #[serde(default)]
    pub assigned_to: Vec<String>,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// When > 0, applied to every question as its time limit.
    #[serde(default)]
    pub time_per_question_seconds: u32,
    /// Free-text generation prompt; used when no file content is given.
    #[serde(default)]
    pub prompt: String,
    /// Decoded text of an uploaded document, if any.
    #[serde(default)]
    pub file_content: Option<String>,
}

/// What the caller gets back after a successful creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssessmentReceipt {
    pub assessment_id: String,
    pub question_count: usize,
}

/// Create and persist an assessment from a prompt or uploaded document.
///
/// Returns [`WorkflowError::NoQuestionSource`] when the engine produced
/// nothing, which only happens when neither a prompt nor file content was
/// supplied.
pub async fn create_assessment(
    engine: &QuestionEngine,
    store: &dyn AssessmentStore,
    request: CreateAssessmentRequest,
) -> Result<CreateAssessmentReceipt, WorkflowError> {
    let mut questions = engine
        .generate(&request.prompt, request.file_content.as_deref())
        .await;

    if questions.is_empty() {
        return Err(WorkflowError::NoQuestionSource);
    }

    if request.time_per_question_seconds > 0 {
        for q in &mut questions {
            q.time_limit_seconds = Some(request.time_per_question_seconds);
        }
    }

    let assessment = Assessment {
        assessment_id: Uuid::new_v4().to_string(),
        title: if request.title.trim().is_empty() {
            "Untitled Assessment".to_string()
        } else {
            request.title
        },
        description: request.description,
        questions,
        created_by: request.created_by,
        created_at: Utc::now(),
        scheduled_for: request.scheduled_for,
        duration_minutes: request.duration_minutes,
        assigned_to: request.assigned_to,
        retake_permissions: Vec::new(),
    };

    store.save_assessment(&assessment)?;
    tracing::info!(
        assessment_id = %assessment.assessment_id,
        question_count = assessment.questions.len(),
        "assessment created"
    );

    Ok(CreateAssessmentReceipt {
        question_count: assessment.questions.len(),
        assessment_id: assessment.assessment_id,
    })
}
