//! The assessment record store.
//!
//! An append-only flat-record store treated as a black box: the workflows
//! depend only on the operations below. [`MemoryStore`] is the in-process
//! implementation used by tests, the CLI, and development setups.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use chrono::{DateTime, Utc};

use quizforge_core::grading::GradingResult;
use quizforge_core::model::Assessment;

/// Storage operations the workflows rely on.
pub trait AssessmentStore: Send + Sync {
    /// Persist a newly created assessment.
    fn save_assessment(&self, assessment: &Assessment) -> Result<()>;

    /// Fetch an assessment by id.
    fn assessment(&self, assessment_id: &str) -> Result<Option<Assessment>>;

    /// Replace an assessment's retake permission list.
    fn set_retake_permissions(&self, assessment_id: &str, user_ids: Vec<String>) -> Result<()>;

    /// Record that a candidate started an attempt.
    fn mark_started(&self, assessment_id: &str, user_id: &str) -> Result<()>;

    /// Append a grading result.
    fn save_result(&self, result: &GradingResult) -> Result<()>;

    /// All grading results, across assessments.
    fn all_results(&self) -> Result<Vec<GradingResult>>;

    /// How many graded attempts a candidate has made on an assessment.
    fn attempt_count(&self, assessment_id: &str, user_id: &str) -> Result<usize>;
}

#[derive(Default)]
struct MemoryStoreInner {
    assessments: HashMap<String, Assessment>,
    results: Vec<GradingResult>,
    started: Vec<(String, String, DateTime<Utc>)>,
}

/// In-memory store backed by a mutexed map.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timestamps recorded for an assessment, for inspection in tests.
    pub fn started_attempts(&self, assessment_id: &str) -> Vec<String> {
        self.inner
            .lock()
            .expect("store mutex poisoned")
            .started
            .iter()
            .filter(|(a, _, _)| a == assessment_id)
            .map(|(_, u, _)| u.clone())
            .collect()
    }
}

impl AssessmentStore for MemoryStore {
    fn save_assessment(&self, assessment: &Assessment) -> Result<()> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner
            .assessments
            .insert(assessment.assessment_id.clone(), assessment.clone());
        Ok(())
    }

    fn assessment(&self, assessment_id: &str) -> Result<Option<Assessment>> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner.assessments.get(assessment_id).cloned())
    }

    fn set_retake_permissions(&self, assessment_id: &str, user_ids: Vec<String>) -> Result<()> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        if let Some(assessment) = inner.assessments.get_mut(assessment_id) {
            assessment.retake_permissions = user_ids;
        }
        Ok(())
    }

    fn mark_started(&self, assessment_id: &str, user_id: &str) -> Result<()> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner
            .started
            .push((assessment_id.to_string(), user_id.to_string(), Utc::now()));
        Ok(())
    }

    fn save_result(&self, result: &GradingResult) -> Result<()> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner.results.push(result.clone());
        Ok(())
    }

    fn all_results(&self) -> Result<Vec<GradingResult>> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner.results.clone())
    }

    fn attempt_count(&self, assessment_id: &str, user_id: &str) -> Result<usize> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner
            .results
            .iter()
            .filter(|r| r.assessment_id == assessment_id && r.user_id == user_id)
            .count())
    }
}
