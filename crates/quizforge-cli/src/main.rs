//! quizforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizforge", version, about = "MCQ extraction and assessment tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract questions from a text document
    Extract {
        /// Path to the document to parse
        #[arg(long)]
        file: PathBuf,

        /// Per-question time limit in seconds (0 = none)
        #[arg(long, default_value = "0")]
        time_per_question: u32,

        /// Output format: json, table
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Generate mock questions from a prompt
    Generate {
        /// Generation prompt (e.g. "Create 5 questions about React Hooks")
        #[arg(long)]
        prompt: String,

        /// Output format: json, table
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Grade a submitted attempt against an assessment
    Grade {
        /// Assessment JSON file (including answer keys)
        #[arg(long)]
        assessment: PathBuf,

        /// Submission JSON file (answers plus timing)
        #[arg(long)]
        submission: PathBuf,

        /// Output format: json, table
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Aggregate statistics over stored grading results
    Stats {
        /// JSON file containing an array of grading results
        #[arg(long)]
        results: PathBuf,

        /// Output format: json, table
        #[arg(long, default_value = "table")]
        format: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            file,
            time_per_question,
            format,
        } => commands::extract::execute(file, time_per_question, format).await,
        Commands::Generate { prompt, format } => {
            commands::generate::execute(prompt, format).await
        }
        Commands::Grade {
            assessment,
            submission,
            format,
        } => commands::grade::execute(assessment, submission, format),
        Commands::Stats { results, format } => commands::stats::execute(results, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
