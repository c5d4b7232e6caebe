//! Core data model types for quizforge.
//!
//! These are the fundamental types the entire quizforge system uses to
//! represent questions, assessments, and their candidate-facing views.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty label attached to every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A single answer choice within a question.
///
/// Option identifiers are single letters ("A", "B", ...), case-normalized
/// to uppercase on extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Option identifier ("A", "B", "C", "D", ...).
    pub id: String,
    /// Option label shown to the candidate.
    pub text: String,
}

impl AnswerOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Metadata bag carried by every question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuestionMeta {
    /// Where the question came from (e.g. "uploaded_file").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Difficulty label.
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl QuestionMeta {
    /// Default metadata for questions extracted from an uploaded document.
    pub fn uploaded_file() -> Self {
        Self {
            source: Some("uploaded_file".to_string()),
            difficulty: Difficulty::Medium,
        }
    }
}

/// A multiple-choice question including its answer key.
///
/// This is the engine's output record, held by examiners and the grading
/// path. It must be redacted via [`QuestionWithAnswer::redact`] before a
/// candidate ever sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionWithAnswer {
    /// Unique identifier, not reused within a parse/generation run.
    pub id: String,
    /// Question text, possibly assembled from multiple source lines.
    pub text: String,
    /// Ordered answer choices. At least two per accepted question.
    pub options: Vec<AnswerOption>,
    /// Identifier of the correct option. Always one of `options`.
    pub correct_option_id: String,
    /// Optional explanation shown after grading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Optional per-question time limit in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_seconds: Option<u32>,
    /// Source tag and difficulty label.
    #[serde(default)]
    pub meta: QuestionMeta,
}

impl QuestionWithAnswer {
    /// Strip the answer key and explanation for candidate exposure.
    pub fn redact(&self) -> Question {
        Question {
            id: self.id.clone(),
            text: self.text.clone(),
            options: self.options.clone(),
            time_limit_seconds: self.time_limit_seconds,
            meta: self.meta.clone(),
        }
    }
}

/// A candidate-facing question with the answer key removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_seconds: Option<u32>,
    #[serde(default)]
    pub meta: QuestionMeta,
}

/// Generate a fresh question identifier.
pub fn new_question_id() -> String {
    Uuid::new_v4().to_string()
}

/// An authored assessment as persisted by the creation workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique assessment identifier.
    pub assessment_id: String,
    /// Title shown to examiners and candidates.
    pub title: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: String,
    /// The question set including answer keys.
    pub questions: Vec<QuestionWithAnswer>,
    /// Examiner who created the assessment.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Optional scheduled start time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
    /// Overall duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Candidate ids the assessment is assigned to.
    #[serde(default)]
    pub assigned_to: Vec<String>,
    /// Candidate ids currently allowed a retake.
    #[serde(default)]
    pub retake_permissions: Vec<String>,
}

impl Assessment {
    /// The candidate-facing view with answer keys stripped.
    pub fn candidate_view(&self) -> AssessmentView {
        AssessmentView {
            assessment_id: self.assessment_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            questions: self.questions.iter().map(QuestionWithAnswer::redact).collect(),
            duration_minutes: self.duration_minutes,
        }
    }
}

/// What a candidate receives when starting an attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentView {
    pub assessment_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}
