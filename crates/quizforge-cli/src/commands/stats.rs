//! The `quizforge stats` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizforge_core::grading::{compute_assessment_stats, GradingResult};

use super::{parse_format, OutputFormat};

pub fn execute(results_path: PathBuf, format: String) -> Result<()> {
    let format = parse_format(&format)?;

    let raw = std::fs::read_to_string(&results_path)
        .with_context(|| format!("failed to read {}", results_path.display()))?;
    let results: Vec<GradingResult> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", results_path.display()))?;

    let stats = compute_assessment_stats(&results);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec![
                "Assessment",
                "Attempts",
                "Users",
                "Avg Time",
                "Min",
                "Max",
                "Mean",
                "Median",
            ]);

            let mut ids: Vec<&String> = stats.keys().collect();
            ids.sort();
            for id in ids {
                let s = &stats[id];
                table.add_row(vec![
                    Cell::new(id),
                    Cell::new(s.total_attempts),
                    Cell::new(s.unique_users_attempted),
                    Cell::new(format!("{:.0}s", s.avg_total_time_seconds)),
                    Cell::new(format!("{:.1}", s.score_distribution.min)),
                    Cell::new(format!("{:.1}", s.score_distribution.max)),
                    Cell::new(format!("{:.1}", s.score_distribution.mean)),
                    Cell::new(format!("{:.1}", s.score_distribution.median)),
                ]);
            }

            println!("{table}");
        }
    }

    Ok(())
}
