//! Line-structured MCQ parser.
//!
//! Treats document text as a sequence of trimmed non-empty lines and
//! recognizes question headers, option lines, and answer-key lines by
//! pattern, accumulating state into question records. Malformed lines are
//! ignored and partial questions (fewer than two options) are discarded
//! rather than emitted half-formed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{new_question_id, AnswerOption, QuestionMeta, QuestionWithAnswer};

/// Matches "1.", "12)", "Q3:", "Question 5)" — a numeric or Q/Question
/// ordinal followed by a separator; the remainder is the question text.
static QUESTION_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:q\s*\d+|question\s*\d+|\d+)\s*[.:)]\s*(.+)$").unwrap());

/// Matches "(A) text" and "(a) text".
static OPTION_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(([A-Da-d])\)\s*(.+)$").unwrap());

/// Matches "A. text", "a) text", "A: text".
static OPTION_SEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Da-d])\s*[.:)]\s*(.+)$").unwrap());

/// Matches "A text" — a bare letter followed by whitespace.
static OPTION_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Da-d])\s+(\S.*)$").unwrap());

/// Matches "Ans: B", "Answer - a", "Correct Option: C", "Answer Key: D".
static ANSWER_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:correct\s*option|correct\s*answer|answer\s*key|answer|ans|correct)[\s:\-]*([A-Da-d])\b",
    )
    .unwrap()
});

/// Pure page numbers and "Page N" footers never interrupt accumulation.
static NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:\d+|page\s+\d+.*)$").unwrap());

/// A question under construction while scanning lines.
struct QuestionBuilder {
    text: String,
    options: Vec<AnswerOption>,
    correct_option_id: Option<String>,
}

impl QuestionBuilder {
    fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            options: Vec::new(),
            correct_option_id: None,
        }
    }

    /// Finalize the question if it meets the emission invariant: non-empty
    /// text and at least two options. The correct option defaults to the
    /// first option when no answer line was seen, and is reset to the first
    /// option if an answer line referenced a letter that never appeared.
    fn finish(self) -> Option<QuestionWithAnswer> {
        if self.text.is_empty() || self.options.len() < 2 {
            return None;
        }
        let first_id = self.options[0].id.clone();
        let correct = match self.correct_option_id {
            Some(id) if self.options.iter().any(|o| o.id == id) => id,
            _ => first_id,
        };
        Some(QuestionWithAnswer {
            id: new_question_id(),
            text: self.text,
            options: self.options,
            correct_option_id: correct,
            explanation: None,
            time_limit_seconds: None,
            meta: QuestionMeta::uploaded_file(),
        })
    }
}

fn parse_answer_key(line: &str) -> Option<String> {
    ANSWER_KEY
        .captures(line)
        .map(|c| c[1].to_ascii_uppercase())
}

fn parse_option(line: &str) -> Option<(String, String)> {
    let caps = OPTION_PAREN
        .captures(line)
        .or_else(|| OPTION_SEP.captures(line))
        .or_else(|| OPTION_SPACE.captures(line))?;
    Some((c_upper(&caps[1]), caps[2].trim().to_string()))
}

fn c_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Parse loosely structured document text into questions.
///
/// Returns an empty vec when no question satisfied the emission invariant,
/// which signals the caller to fall through to the mashed-content parser.
pub fn parse_lines(content: &str) -> Vec<QuestionWithAnswer> {
    let mut questions = Vec::new();
    let mut current: Option<QuestionBuilder> = None;

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() || NOISE.is_match(line) {
            continue;
        }

        // Answer key and option lines only apply to a question in progress.
        if let Some(cur) = current.as_mut() {
            if let Some(letter) = parse_answer_key(line) {
                cur.correct_option_id = Some(letter);
                continue;
            }
            if let Some((id, text)) = parse_option(line) {
                cur.options.push(AnswerOption::new(id, text));
                continue;
            }
        }

        if let Some(caps) = QUESTION_START.captures(line) {
            if let Some(done) = current.take().and_then(QuestionBuilder::finish) {
                questions.push(done);
            }
            current = Some(QuestionBuilder::new(&caps[1]));
            continue;
        }

        // Unmatched text before the options begin continues the question
        // text (questions wrapping across lines). Anything else is noise.
        if let Some(cur) = current.as_mut() {
            if cur.options.is_empty() {
                cur.text.push(' ');
                cur.text.push_str(line);
            } else {
                tracing::debug!("dropping unrecognized line: {line:?}");
            }
        }
    }

    if let Some(done) = current.and_then(QuestionBuilder::finish) {
        questions.push(done);
    }

    questions
}
