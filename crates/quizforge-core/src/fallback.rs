//! Diagnostic fallback questions.
//!
//! When every parsing strategy comes up empty the workflow still receives
//! exactly one synthetic question describing the failure, so the user-facing
//! flow never gets an empty result silently.

use crate::model::{new_question_id, AnswerOption, QuestionMeta, QuestionWithAnswer};

/// How much of the input is echoed back for diagnosis.
const PREVIEW_CHARS: usize = 500;

/// Synthetic question for input with no extractable text at all, e.g. a
/// scanned image-only PDF.
pub fn no_text_extracted() -> QuestionWithAnswer {
    QuestionWithAnswer {
        id: new_question_id(),
        text: "Parsing Failed: No text could be read from the document. This usually happens \
               with scanned PDFs or images. Please use a text-based PDF (selectable text) or \
               convert your file to .txt."
            .to_string(),
        options: vec![
            AnswerOption::new("A", "Use a text-based PDF"),
            AnswerOption::new("B", "Convert to .txt file"),
            AnswerOption::new("C", "Type questions manually"),
            AnswerOption::new("D", "Use OCR software first"),
        ],
        correct_option_id: "A".to_string(),
        explanation: None,
        time_limit_seconds: None,
        meta: QuestionMeta::uploaded_file(),
    }
}

/// Synthetic question for text that was extracted but matched no known
/// structure. Echoes the first [`PREVIEW_CHARS`] characters verbatim so the
/// caller can diagnose the formatting.
pub fn unrecognized_structure(content: &str) -> QuestionWithAnswer {
    let preview: String = content.chars().take(PREVIEW_CHARS).collect();
    QuestionWithAnswer {
        id: new_question_id(),
        text: format!(
            "Parsing Failed. Here is what we read from your file (first {PREVIEW_CHARS} chars). \
             Please check if the format matches our expectations:\n\n{preview}"
        ),
        options: vec![
            AnswerOption::new("A", "Format your document correctly"),
            AnswerOption::new("B", "Use standard numbering"),
            AnswerOption::new("C", "Check for \"Answer:\" lines"),
            AnswerOption::new("D", "Try converting to a text file"),
        ],
        correct_option_id: "A".to_string(),
        explanation: None,
        time_limit_seconds: None,
        meta: QuestionMeta::uploaded_file(),
    }
}
