//! Admin analytics over stored grading results.

use std::collections::HashMap;

use quizforge_core::error::WorkflowError;
use quizforge_core::grading::{compute_assessment_stats, AssessmentStats};

use crate::store::AssessmentStore;

/// Aggregate statistics for every assessment that has at least one graded
/// attempt, keyed by assessment id.
pub fn admin_analytics(
    store: &dyn AssessmentStore,
) -> Result<HashMap<String, AssessmentStats>, WorkflowError> {
    let results = store.all_results()?;
    Ok(compute_assessment_stats(&results))
}
