//! Question engine orchestrator.
//!
//! Routes a generation request to the document parsing path or the mock
//! generator, and runs the parsing path as an ordered chain of extraction
//! strategies with a guaranteed-emission diagnostic terminal.

use std::time::Duration;

use crate::extract;
use crate::fallback;
use crate::generator;
use crate::mashed;
use crate::model::QuestionWithAnswer;

/// One extraction strategy in the fallback chain.
///
/// A strategy signals failure by returning an empty vec — never by erroring —
/// so the orchestrator can fall through to the next tier.
pub trait ExtractionStrategy: Send + Sync {
    /// Strategy name, used in fallthrough logging.
    fn name(&self) -> &str;

    /// Attempt to extract questions from document text.
    fn extract(&self, content: &str) -> Vec<QuestionWithAnswer>;
}

/// Line-structured parsing, the primary strategy.
pub struct LineStructured;

impl ExtractionStrategy for LineStructured {
    fn name(&self) -> &str {
        "line-structured"
    }

    fn extract(&self, content: &str) -> Vec<QuestionWithAnswer> {
        extract::parse_lines(content)
    }
}

/// Mashed-content parsing for table layouts with missing line breaks.
pub struct MashedContent;

impl ExtractionStrategy for MashedContent {
    fn name(&self) -> &str {
        "mashed-content"
    }

    fn extract(&self, content: &str) -> Vec<QuestionWithAnswer> {
        mashed::parse_mashed(content)
    }
}

/// Configuration for the question engine.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Optional artificial delay before returning, simulating a remote
    /// generation call. Disabled by default.
    pub simulated_latency: Option<Duration>,
}

/// The question engine. Stateless and idempotent given the same input;
/// safe to invoke concurrently for unrelated requests.
pub struct QuestionEngine {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
    config: EngineConfig,
}

impl QuestionEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            strategies: vec![Box::new(LineStructured), Box::new(MashedContent)],
            config,
        }
    }

    /// Generate questions from a prompt and/or uploaded document text.
    ///
    /// Routing:
    /// - file content present (even empty, signalling an upstream decode
    ///   failure) → the parsing path;
    /// - otherwise a non-empty prompt → the mock generator;
    /// - otherwise an empty vec, which the caller must reject.
    pub async fn generate(
        &self,
        prompt: &str,
        file_content: Option<&str>,
    ) -> Vec<QuestionWithAnswer> {
        if let Some(delay) = self.config.simulated_latency {
            tokio::time::sleep(delay).await;
        }

        if let Some(content) = file_content {
            return self.parse_document(content);
        }

        if !prompt.trim().is_empty() {
            return generator::generate_mock(prompt);
        }

        Vec::new()
    }

    /// Run the strategy chain over document text. Always returns at least
    /// one question.
    pub fn parse_document(&self, content: &str) -> Vec<QuestionWithAnswer> {
        if content.trim().is_empty() {
            tracing::warn!("no text extracted from uploaded document");
            return vec![fallback::no_text_extracted()];
        }

        for strategy in &self.strategies {
            let questions = strategy.extract(content);
            if !questions.is_empty() {
                tracing::debug!(
                    strategy = strategy.name(),
                    count = questions.len(),
                    "extraction succeeded"
                );
                return questions;
            }
            tracing::warn!(
                strategy = strategy.name(),
                "strategy found no questions, falling through"
            );
        }

        let preview: String = content.chars().take(200).collect();
        tracing::warn!(preview = %preview, "all strategies failed, emitting diagnostic question");
        vec![fallback::unrecognized_structure(content)]
    }
}

impl Default for QuestionEngine {
    fn default() -> Self {
        Self::new()
    }
}
