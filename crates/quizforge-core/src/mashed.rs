//! Parser for "mashed" content where line breaks are missing, typically
//! from table-layout PDF text extraction.
//!
//! Heuristic: a question ends in '?', followed by a blob of concatenated
//! options, ending with a single answer letter that sits immediately before
//! the start of the next question (an uppercase letter) or end of input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{new_question_id, AnswerOption, QuestionMeta, QuestionWithAnswer};

/// Upper bound on scan iterations. Guards worst-case latency against
/// adversarial or pathological input.
pub const MAX_MATCHES: usize = 500;

/// Captures: question text, options blob, answer letter, and the character
/// run after the answer. The final group stands in for a lookahead — the
/// scan resumes at its start position so the next match can consume it.
static MASHED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^?]+)\?\s*([^?]+)([A-D])(\s*[A-Z]|\s*$)").unwrap());

/// Leading table-header artifact ("Question Option A ... Correct Answer")
/// that otherwise pollutes the first match.
static TABLE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Question\s*Option\s*A.*Correct\s*Answer").unwrap());

/// Parse un-split document text into questions.
///
/// Returns an empty vec when nothing was accepted, which signals the caller
/// to fall through to the diagnostic fallback.
pub fn parse_mashed(content: &str) -> Vec<QuestionWithAnswer> {
    let cleaned = TABLE_HEADER.replace(content, "");
    let text: &str = &cleaned;

    let mut questions = Vec::new();
    let mut pos = 0usize;
    let mut scans = 0usize;

    while pos < text.len() {
        scans += 1;
        if scans > MAX_MATCHES {
            tracing::warn!("mashed scan hit the {MAX_MATCHES}-match cap, stopping");
            break;
        }

        let Some(caps) = MASHED.captures(&text[pos..]) else {
            break;
        };

        let q_text = caps[1].trim().to_string();
        let blob = caps[2].trim().to_string();
        let answer = caps[3].to_ascii_uppercase();
        // Groups 1-3 are non-empty, so this always advances the scan.
        pos += caps.get(4).expect("tail group always present").start();

        // Noise filter: ignore fragments too short to be a question.
        if q_text.len() < 5 {
            continue;
        }

        let options = split_options(&blob);
        if options.len() < 2 {
            tracing::debug!("mashed candidate {q_text:?} produced {} options, skipping", options.len());
            continue;
        }

        let correct = if options.iter().any(|o| o.id == answer) {
            answer
        } else {
            options[0].id.clone()
        };

        questions.push(QuestionWithAnswer {
            id: new_question_id(),
            text: format!("{q_text}?"),
            options,
            correct_option_id: correct,
            explanation: None,
            time_limit_seconds: None,
            meta: QuestionMeta::uploaded_file(),
        });
    }

    questions
}

/// Split an options blob at the boundary before each uppercase letter and
/// assign sequential identifiers starting at 'A', taking at most four
/// fragments.
///
/// Known heuristic limitation: option text containing capitalized words
/// fragments at each capital. Preserved as-is.
fn split_options(blob: &str) -> Vec<AnswerOption> {
    let mut fragments = Vec::new();
    let mut start = 0usize;
    for (i, ch) in blob.char_indices() {
        if i > 0 && ch.is_ascii_uppercase() {
            fragments.push(&blob[start..i]);
            start = i;
        }
    }
    fragments.push(&blob[start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .take(4)
        .enumerate()
        .map(|(idx, text)| AnswerOption::new(char::from(b'A' + idx as u8).to_string(), text))
        .collect()
}
