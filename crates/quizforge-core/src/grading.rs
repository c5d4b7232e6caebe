//! Attempt grading and per-assessment aggregate statistics.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Assessment;

/// A candidate's answer to a single question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: String,
    pub option_id: String,
}

/// A completed attempt submitted for grading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingRequest {
    pub assessment_id: String,
    pub user_id: String,
    pub answers: Vec<AnswerSubmission>,
    pub time_started: DateTime<Utc>,
    pub time_submitted: DateTime<Utc>,
}

/// Per-question grading outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedResult {
    pub question_id: String,
    /// Submitted option id, empty when the question was left unanswered.
    pub submitted: String,
    pub correct: String,
    pub is_correct: bool,
    pub points_awarded: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Timing and accuracy figures for one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptAnalytics {
    pub time_taken_seconds: f64,
    pub avg_time_per_question_seconds: f64,
    pub accuracy_percent: f64,
}

/// The graded outcome of one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingResult {
    pub user_id: String,
    pub assessment_id: String,
    /// Percentage score out of `max_score`.
    pub score: f64,
    pub max_score: f64,
    pub correct_count: usize,
    pub total_questions: usize,
    pub detailed: Vec<DetailedResult>,
    pub analytics: AttemptAnalytics,
    pub graded_at: DateTime<Utc>,
}

/// Grade a submitted attempt against the assessment's answer key.
///
/// Unanswered questions count as wrong with an empty submission. Negative
/// elapsed time (clock skew) is clamped to zero.
pub fn grade(assessment: &Assessment, request: &GradingRequest) -> GradingResult {
    let mut correct_count = 0usize;
    let mut detailed = Vec::with_capacity(assessment.questions.len());

    for question in &assessment.questions {
        let submitted = request
            .answers
            .iter()
            .find(|a| a.question_id == question.id)
            .map(|a| a.option_id.clone())
            .unwrap_or_default();
        let is_correct = submitted == question.correct_option_id;
        if is_correct {
            correct_count += 1;
        }
        detailed.push(DetailedResult {
            question_id: question.id.clone(),
            submitted,
            correct: question.correct_option_id.clone(),
            is_correct,
            points_awarded: u32::from(is_correct),
            explanation: question.explanation.clone(),
        });
    }

    let total_questions = assessment.questions.len();
    let score = if total_questions == 0 {
        0.0
    } else {
        correct_count as f64 / total_questions as f64 * 100.0
    };

    let elapsed_ms = (request.time_submitted - request.time_started).num_milliseconds();
    let time_taken_seconds = (elapsed_ms as f64 / 1000.0).max(0.0);

    GradingResult {
        user_id: request.user_id.clone(),
        assessment_id: request.assessment_id.clone(),
        score,
        max_score: 100.0,
        correct_count,
        total_questions,
        detailed,
        analytics: AttemptAnalytics {
            time_taken_seconds,
            avg_time_per_question_seconds: if total_questions == 0 {
                0.0
            } else {
                time_taken_seconds / total_questions as f64
            },
            accuracy_percent: score,
        },
        graded_at: Utc::now(),
    }
}

/// Score distribution over all attempts of one assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Aggregate statistics for one assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentStats {
    pub total_attempts: usize,
    pub unique_users_attempted: usize,
    pub avg_total_time_seconds: f64,
    pub avg_time_per_question_seconds: f64,
    pub score_distribution: ScoreDistribution,
}

/// Compute per-assessment aggregate statistics from stored results.
pub fn compute_assessment_stats(results: &[GradingResult]) -> HashMap<String, AssessmentStats> {
    let mut grouped: HashMap<&str, Vec<&GradingResult>> = HashMap::new();
    for r in results {
        grouped.entry(r.assessment_id.as_str()).or_default().push(r);
    }

    let avg = |values: &[f64]| -> f64 {
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    };

    let mut stats = HashMap::new();
    for (assessment_id, group) in grouped {
        let mut scores: Vec<f64> = group.iter().map(|r| r.score).collect();
        scores.sort_by(|a, b| a.partial_cmp(b).expect("scores are finite"));

        let times: Vec<f64> = group
            .iter()
            .map(|r| r.analytics.time_taken_seconds)
            .collect();
        let per_question: Vec<f64> = group
            .iter()
            .map(|r| r.analytics.avg_time_per_question_seconds)
            .collect();
        let unique_users: HashSet<&str> = group.iter().map(|r| r.user_id.as_str()).collect();

        stats.insert(
            assessment_id.to_string(),
            AssessmentStats {
                total_attempts: group.len(),
                unique_users_attempted: unique_users.len(),
                avg_total_time_seconds: avg(&times),
                avg_time_per_question_seconds: avg(&per_question),
                score_distribution: ScoreDistribution {
                    min: scores.first().copied().unwrap_or(0.0),
                    max: scores.last().copied().unwrap_or(0.0),
                    mean: avg(&scores),
                    median: scores.get(scores.len() / 2).copied().unwrap_or(0.0),
                },
            },
        );
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, QuestionMeta, QuestionWithAnswer};
    use chrono::TimeZone;

    fn question(id: &str, correct: &str) -> QuestionWithAnswer {
        QuestionWithAnswer {
            id: id.into(),
            text: format!("Question {id}"),
            options: vec![AnswerOption::new("A", "one"), AnswerOption::new("B", "two")],
            correct_option_id: correct.into(),
            explanation: Some(format!("Because {correct}")),
            time_limit_seconds: None,
            meta: QuestionMeta::default(),
        }
    }

    fn assessment(questions: Vec<QuestionWithAnswer>) -> Assessment {
        Assessment {
            assessment_id: "asm-1".into(),
            title: "Test".into(),
            description: String::new(),
            questions,
            created_by: "examiner-1".into(),
            created_at: Utc::now(),
            scheduled_for: None,
            duration_minutes: Some(30),
            assigned_to: vec![],
            retake_permissions: vec![],
        }
    }

    fn request(answers: Vec<AnswerSubmission>, taken_secs: i64) -> GradingRequest {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        GradingRequest {
            assessment_id: "asm-1".into(),
            user_id: "cand-1".into(),
            answers,
            time_started: start,
            time_submitted: start + chrono::Duration::seconds(taken_secs),
        }
    }

    fn answer(q: &str, o: &str) -> AnswerSubmission {
        AnswerSubmission {
            question_id: q.into(),
            option_id: o.into(),
        }
    }

    #[test]
    fn grades_all_correct() {
        let asm = assessment(vec![question("q1", "A"), question("q2", "B")]);
        let result = grade(&asm, &request(vec![answer("q1", "A"), answer("q2", "B")], 120));

        assert_eq!(result.correct_count, 2);
        assert!((result.score - 100.0).abs() < f64::EPSILON);
        assert!((result.analytics.time_taken_seconds - 120.0).abs() < f64::EPSILON);
        assert!((result.analytics.avg_time_per_question_seconds - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn grades_partial_and_unanswered() {
        let asm = assessment(vec![
            question("q1", "A"),
            question("q2", "B"),
            question("q3", "A"),
            question("q4", "B"),
        ]);
        // q3 wrong, q4 unanswered.
        let result = grade(&asm, &request(vec![answer("q1", "A"), answer("q2", "B"), answer("q3", "B")], 60));

        assert_eq!(result.correct_count, 2);
        assert!((result.score - 50.0).abs() < f64::EPSILON);
        assert_eq!(result.detailed[3].submitted, "");
        assert!(!result.detailed[3].is_correct);
        assert_eq!(result.detailed[0].points_awarded, 1);
        assert_eq!(result.detailed[2].points_awarded, 0);
    }

    #[test]
    fn detailed_results_carry_explanations() {
        let asm = assessment(vec![question("q1", "A")]);
        let result = grade(&asm, &request(vec![answer("q1", "B")], 10));
        assert_eq!(result.detailed[0].explanation.as_deref(), Some("Because A"));
        assert_eq!(result.detailed[0].correct, "A");
    }

    #[test]
    fn negative_elapsed_time_is_clamped() {
        let asm = assessment(vec![question("q1", "A")]);
        let result = grade(&asm, &request(vec![], -30));
        assert_eq!(result.analytics.time_taken_seconds, 0.0);
    }

    fn stored_result(assessment_id: &str, user_id: &str, score: f64, secs: f64) -> GradingResult {
        GradingResult {
            user_id: user_id.into(),
            assessment_id: assessment_id.into(),
            score,
            max_score: 100.0,
            correct_count: 0,
            total_questions: 4,
            detailed: vec![],
            analytics: AttemptAnalytics {
                time_taken_seconds: secs,
                avg_time_per_question_seconds: secs / 4.0,
                accuracy_percent: score,
            },
            graded_at: Utc::now(),
        }
    }

    #[test]
    fn aggregates_stats_per_assessment() {
        let results = vec![
            stored_result("asm-1", "u1", 50.0, 100.0),
            stored_result("asm-1", "u2", 75.0, 200.0),
            stored_result("asm-1", "u1", 100.0, 300.0),
            stored_result("asm-2", "u3", 25.0, 40.0),
        ];

        let stats = compute_assessment_stats(&results);
        assert_eq!(stats.len(), 2);

        let s1 = &stats["asm-1"];
        assert_eq!(s1.total_attempts, 3);
        assert_eq!(s1.unique_users_attempted, 2);
        assert!((s1.avg_total_time_seconds - 200.0).abs() < f64::EPSILON);
        assert!((s1.score_distribution.min - 50.0).abs() < f64::EPSILON);
        assert!((s1.score_distribution.max - 100.0).abs() < f64::EPSILON);
        assert!((s1.score_distribution.mean - 75.0).abs() < f64::EPSILON);
        assert!((s1.score_distribution.median - 75.0).abs() < f64::EPSILON);

        let s2 = &stats["asm-2"];
        assert_eq!(s2.total_attempts, 1);
        assert!((s2.score_distribution.median - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_results_yields_no_stats() {
        assert!(compute_assessment_stats(&[]).is_empty());
    }
}
