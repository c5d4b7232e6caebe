pub mod extract;
pub mod generate;
pub mod grade;
pub mod stats;

use anyhow::{bail, Result};
use comfy_table::{Cell, Table};

use quizforge_core::model::QuestionWithAnswer;

/// Validate the `--format` flag shared by all subcommands.
pub fn parse_format(format: &str) -> Result<OutputFormat> {
    match format {
        "json" => Ok(OutputFormat::Json),
        "table" => Ok(OutputFormat::Table),
        other => bail!("unknown format: {other} (expected json or table)"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Render a question list in the requested format.
pub fn print_questions(questions: &[QuestionWithAnswer], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(questions)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec!["#", "Question", "Options", "Answer", "Difficulty"]);

            for (i, q) in questions.iter().enumerate() {
                let options = q
                    .options
                    .iter()
                    .map(|o| format!("{}. {}", o.id, o.text))
                    .collect::<Vec<_>>()
                    .join("\n");
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(&q.text),
                    Cell::new(options),
                    Cell::new(&q.correct_option_id),
                    Cell::new(q.meta.difficulty),
                ]);
            }

            println!("{table}");
            println!("{} question(s)", questions.len());
        }
    }
    Ok(())
}
