//! The `quizforge extract` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizforge_core::engine::QuestionEngine;

use super::{parse_format, print_questions};

pub async fn execute(file: PathBuf, time_per_question: u32, format: String) -> Result<()> {
    let format = parse_format(&format)?;
    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let engine = QuestionEngine::new();
    let mut questions = engine.generate("", Some(&content)).await;

    if time_per_question > 0 {
        for q in &mut questions {
            q.time_limit_seconds = Some(time_per_question);
        }
    }

    print_questions(&questions, format)
}
