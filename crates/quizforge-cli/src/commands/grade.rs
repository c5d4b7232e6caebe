//! The `quizforge grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizforge_core::grading::{self, GradingRequest};
use quizforge_core::model::Assessment;

use super::{parse_format, OutputFormat};

pub fn execute(assessment_path: PathBuf, submission_path: PathBuf, format: String) -> Result<()> {
    let format = parse_format(&format)?;

    let assessment: Assessment = read_json(&assessment_path)?;
    let submission: GradingRequest = read_json(&submission_path)?;

    let result = grading::grade(&assessment, &submission);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec!["Question", "Submitted", "Correct", "Result"]);
            for d in &result.detailed {
                table.add_row(vec![
                    Cell::new(&d.question_id),
                    Cell::new(if d.submitted.is_empty() {
                        "-"
                    } else {
                        d.submitted.as_str()
                    }),
                    Cell::new(&d.correct),
                    Cell::new(if d.is_correct { "pass" } else { "fail" }),
                ]);
            }
            println!("{table}");
            println!(
                "Score: {:.1}/{:.0} ({} of {} correct, {:.0}s)",
                result.score,
                result.max_score,
                result.correct_count,
                result.total_questions,
                result.analytics.time_taken_seconds,
            );
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
