//! The `quizforge generate` command.

use anyhow::Result;

use quizforge_core::engine::QuestionEngine;

use super::{parse_format, print_questions};

pub async fn execute(prompt: String, format: String) -> Result<()> {
    let format = parse_format(&format)?;

    let engine = QuestionEngine::new();
    let questions = engine.generate(&prompt, None).await;

    print_questions(&questions, format)
}
