//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizforge() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizforge").unwrap()
}

#[test]
fn extract_structured_document() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("quiz.txt");
    std::fs::write(
        &doc,
        "1. What is the capital of France?\n\
         A. London\n\
         B. Paris\n\
         C. Berlin\n\
         Answer: B\n\
         2. What is 2 + 2?\n\
         A. 3\n\
         B. 4\n\
         Answer: B\n",
    )
    .unwrap();

    quizforge()
        .arg("extract")
        .arg("--file")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("capital of France"))
        .stdout(predicate::str::contains("2 question(s)"));
}

#[test]
fn extract_json_output_is_parseable() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("quiz.txt");
    std::fs::write(&doc, "1. Pick one\nA. x\nB. y\nAnswer: A\n").unwrap();

    let output = quizforge()
        .arg("extract")
        .arg("--file")
        .arg(&doc)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let questions: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(questions.as_array().unwrap().len(), 1);
    assert_eq!(questions[0]["correct_option_id"], "A");
}

#[test]
fn extract_applies_time_per_question() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("quiz.txt");
    std::fs::write(&doc, "1. Pick one\nA. x\nB. y\nAnswer: A\n").unwrap();

    let output = quizforge()
        .arg("extract")
        .arg("--file")
        .arg(&doc)
        .arg("--time-per-question")
        .arg("45")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let questions: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(questions[0]["time_limit_seconds"], 45);
}

#[test]
fn extract_unstructured_document_yields_diagnostic() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("notes.txt");
    std::fs::write(&doc, "just some meeting notes with no quiz structure").unwrap();

    quizforge()
        .arg("extract")
        .arg("--file")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 question(s)"));
}

#[test]
fn extract_nonexistent_file() {
    quizforge()
        .arg("extract")
        .arg("--file")
        .arg("no_such_file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn generate_from_prompt() {
    quizforge()
        .arg("generate")
        .arg("--prompt")
        .arg("Create 5 questions about React Hooks")
        .assert()
        .success()
        .stdout(predicate::str::contains("React Hooks"))
        .stdout(predicate::str::contains("5 question(s)"));
}

#[test]
fn generate_default_count_and_topic() {
    let output = quizforge()
        .arg("generate")
        .arg("--prompt")
        .arg("make me a quiz")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let questions: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(questions.as_array().unwrap().len(), 3);
    assert!(questions[0]["text"]
        .as_str()
        .unwrap()
        .contains("General Knowledge"));
}

#[test]
fn generate_rejects_unknown_format() {
    quizforge()
        .arg("generate")
        .arg("--prompt")
        .arg("quiz about anything")
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn grade_submission() {
    let dir = TempDir::new().unwrap();
    let assessment_path = dir.path().join("assessment.json");
    let submission_path = dir.path().join("submission.json");

    std::fs::write(&assessment_path, make_assessment_json()).unwrap();
    std::fs::write(&submission_path, make_submission_json()).unwrap();

    quizforge()
        .arg("grade")
        .arg("--assessment")
        .arg(&assessment_path)
        .arg("--submission")
        .arg(&submission_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 50.0/100"))
        .stdout(predicate::str::contains("1 of 2 correct"));
}

#[test]
fn grade_nonexistent_assessment() {
    quizforge()
        .arg("grade")
        .arg("--assessment")
        .arg("no_such.json")
        .arg("--submission")
        .arg("also_missing.json")
        .assert()
        .failure();
}

#[test]
fn stats_over_results() {
    let dir = TempDir::new().unwrap();
    let results_path = dir.path().join("results.json");
    std::fs::write(&results_path, make_results_json()).unwrap();

    quizforge()
        .arg("stats")
        .arg("--results")
        .arg(&results_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("asm-1"))
        .stdout(predicate::str::contains("75.0"));
}

#[test]
fn help_output() {
    quizforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MCQ extraction"));
}

#[test]
fn version_output() {
    quizforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizforge"));
}

/// Minimal assessment JSON with two questions.
fn make_assessment_json() -> String {
    r#"{
    "assessment_id": "asm-1",
    "title": "Sample",
    "description": "",
    "questions": [
        {
            "id": "q1",
            "text": "2 + 2?",
            "options": [
                {"id": "A", "text": "3"},
                {"id": "B", "text": "4"}
            ],
            "correct_option_id": "B"
        },
        {
            "id": "q2",
            "text": "3 * 3?",
            "options": [
                {"id": "A", "text": "9"},
                {"id": "B", "text": "6"}
            ],
            "correct_option_id": "A"
        }
    ],
    "created_by": "examiner-1",
    "created_at": "2025-06-01T12:00:00Z"
}"#
    .to_string()
}

fn make_submission_json() -> String {
    r#"{
    "assessment_id": "asm-1",
    "user_id": "cand-1",
    "answers": [
        {"question_id": "q1", "option_id": "B"},
        {"question_id": "q2", "option_id": "B"}
    ],
    "time_started": "2025-06-01T12:00:00Z",
    "time_submitted": "2025-06-01T12:02:00Z"
}"#
    .to_string()
}

fn make_results_json() -> String {
    r#"[
    {
        "user_id": "u1",
        "assessment_id": "asm-1",
        "score": 50.0,
        "max_score": 100.0,
        "correct_count": 1,
        "total_questions": 2,
        "detailed": [],
        "analytics": {
            "time_taken_seconds": 60.0,
            "avg_time_per_question_seconds": 30.0,
            "accuracy_percent": 50.0
        },
        "graded_at": "2025-06-01T12:05:00Z"
    },
    {
        "user_id": "u2",
        "assessment_id": "asm-1",
        "score": 100.0,
        "max_score": 100.0,
        "correct_count": 2,
        "total_questions": 2,
        "detailed": [],
        "analytics": {
            "time_taken_seconds": 90.0,
            "avg_time_per_question_seconds": 45.0,
            "accuracy_percent": 100.0
        },
        "graded_at": "2025-06-01T12:06:00Z"
    }
]"#
    .to_string()
}
