//! Template-based mock question generator.
//!
//! Used when no document content is supplied and only a free-text prompt is
//! given. Extracts a topic and a desired count from the prompt and stamps
//! out question instances from a fixed template bank. This path never fails:
//! any non-empty prompt yields exactly `count` well-formed questions.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    new_question_id, AnswerOption, Difficulty, QuestionMeta, QuestionWithAnswer,
};

/// Topic from "about X", up to the next clause boundary.
static TOPIC_ABOUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)about\s+([^,.;!]+)").unwrap());

/// Topic from "on X", tried when "about X" is absent.
static TOPIC_ON: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)on\s+([^,.;!]+)").unwrap());

/// Desired count: an integer followed (possibly after qualifier words like
/// "multiple choice") by "mcq(s)" or "question(s)".
static COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)(?:\s+[a-z-]+)*?\s+(?:mcqs?|questions?)\b").unwrap());

const DEFAULT_TOPIC: &str = "General Knowledge";
const DEFAULT_COUNT: usize = 3;

/// One entry in the fixed template bank. `{topic}` is substituted into the
/// question text and explanation.
struct MockTemplate {
    text: &'static str,
    options: [(&'static str, &'static str); 4],
    correct: &'static str,
    explanation: &'static str,
}

static TEMPLATE_BANK: [MockTemplate; 5] = [
    MockTemplate {
        text: "What is the primary purpose of {topic}?",
        options: [
            ("A", "To improve performance"),
            ("B", "To increase complexity"),
            ("C", "To reduce security"),
            ("D", "None of the above"),
        ],
        correct: "A",
        explanation: "{topic} is mainly used to optimize and improve system performance.",
    },
    MockTemplate {
        text: "Which of the following is a key feature of {topic}?",
        options: [
            ("A", "Manual memory management"),
            ("B", "Scalability and flexibility"),
            ("C", "Single-threaded execution only"),
            ("D", "Requires expensive hardware"),
        ],
        correct: "B",
        explanation: "Scalability is one of the defining features of {topic}.",
    },
    MockTemplate {
        text: "When should you use {topic} in a project?",
        options: [
            ("A", "Never, it is deprecated"),
            ("B", "Only for small scripts"),
            ("C", "When you need robust data handling"),
            ("D", "For styling only"),
        ],
        correct: "C",
        explanation: "{topic} is ideal for scenarios requiring strong data management capabilities.",
    },
    MockTemplate {
        text: "What is a common misconception about {topic}?",
        options: [
            ("A", "It is easy to learn"),
            ("B", "It is only for frontend"),
            ("C", "It does not support async operations"),
            ("D", "It is extremely slow"),
        ],
        correct: "B",
        explanation: "Many people incorrectly assume {topic} is limited to a specific domain, \
                      which is not true.",
    },
    MockTemplate {
        text: "How does {topic} handle errors?",
        options: [
            ("A", "It ignores them"),
            ("B", "Using try-catch blocks"),
            ("C", "By crashing the system"),
            ("D", "It does not have error handling"),
        ],
        correct: "B",
        explanation: "Standard error handling in {topic} involves try-catch mechanisms.",
    },
];

/// Extract the topic from a prompt, defaulting to "General Knowledge".
pub fn extract_topic(prompt: &str) -> String {
    TOPIC_ABOUT
        .captures(prompt)
        .or_else(|| TOPIC_ON.captures(prompt))
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string())
}

/// Extract the desired question count from a prompt, defaulting to 3.
pub fn extract_count(prompt: &str) -> usize {
    COUNT
        .captures(prompt)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(DEFAULT_COUNT)
}

/// Generate `count` questions by cycling through the template bank.
///
/// Difficulty is assigned by position: every third question is hard,
/// alternating medium/easy otherwise.
pub fn generate_mock(prompt: &str) -> Vec<QuestionWithAnswer> {
    let topic = extract_topic(prompt);
    let count = extract_count(prompt);

    (0..count)
        .map(|i| {
            let template = &TEMPLATE_BANK[i % TEMPLATE_BANK.len()];
            let difficulty = if i % 3 == 0 {
                Difficulty::Hard
            } else if i % 2 == 0 {
                Difficulty::Medium
            } else {
                Difficulty::Easy
            };
            QuestionWithAnswer {
                id: new_question_id(),
                text: format!("Q{}: {}", i + 1, template.text.replace("{topic}", &topic)),
                // Fresh options per question so downstream mutation (e.g. a
                // global time override) cannot alias across questions.
                options: template
                    .options
                    .iter()
                    .map(|(id, text)| AnswerOption::new(*id, *text))
                    .collect(),
                correct_option_id: template.correct.to_string(),
                explanation: Some(template.explanation.replace("{topic}", &topic)),
                time_limit_seconds: None,
                meta: QuestionMeta {
                    source: Some("prompt".to_string()),
                    difficulty,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_from_about_clause() {
        assert_eq!(
            extract_topic("Generate 10 MCQs about Rust ownership, please"),
            "Rust ownership"
        );
    }

    #[test]
    fn topic_from_on_clause() {
        assert_eq!(extract_topic("5 questions on SQL joins."), "SQL joins");
    }

    #[test]
    fn topic_defaults_to_general_knowledge() {
        assert_eq!(extract_topic("give me a quiz"), "General Knowledge");
    }

    #[test]
    fn count_with_intervening_qualifiers() {
        assert_eq!(
            extract_count("Create 5 multiple choice questions about React Hooks"),
            5
        );
        assert_eq!(extract_count("25 MCQs about history"), 25);
        assert_eq!(extract_count("generate 7 questions on math"), 7);
    }

    #[test]
    fn count_defaults_to_three() {
        assert_eq!(extract_count("quiz me about space"), 3);
    }

    #[test]
    fn generates_exact_count_with_topic_substituted() {
        let questions = generate_mock(
            "Create 5 multiple choice questions about React Hooks for intermediate developers",
        );
        assert_eq!(questions.len(), 5);
        for q in &questions {
            assert!(q.text.contains("React Hooks"), "missing topic in {:?}", q.text);
            assert!(q.options.len() >= 2);
            assert!(q.options.iter().any(|o| o.id == q.correct_option_id));
            assert!(q.explanation.is_some());
        }
    }

    #[test]
    fn difficulty_follows_position_rule() {
        let questions = generate_mock("Create 6 questions about testing");
        let difficulties: Vec<Difficulty> =
            questions.iter().map(|q| q.meta.difficulty).collect();
        assert_eq!(
            difficulties,
            vec![
                Difficulty::Hard,   // 0 % 3 == 0
                Difficulty::Easy,   // 1
                Difficulty::Medium, // 2 % 2 == 0
                Difficulty::Hard,   // 3 % 3 == 0
                Difficulty::Medium, // 4 % 2 == 0
                Difficulty::Easy,   // 5
            ]
        );
    }

    #[test]
    fn options_are_cloned_per_question() {
        let mut questions = generate_mock("Create 6 questions about cloning");
        // Templates repeat after five questions; mutating one copy must not
        // leak into the other.
        questions[0].options[0].text.push_str(" MUTATED");
        assert!(!questions[5].options[0].text.contains("MUTATED"));
    }

    #[test]
    fn template_bank_cycles_in_order() {
        let questions = generate_mock("Create 7 questions about cycles");
        assert_eq!(questions.len(), 7);
        // Question 6 reuses template 0, question 7 reuses template 1.
        assert!(questions[5].text.contains("primary purpose"));
        assert!(questions[6].text.contains("key feature"));
    }

    #[test]
    fn question_numbering_is_sequential() {
        let questions = generate_mock("3 questions about numbering");
        assert!(questions[0].text.starts_with("Q1:"));
        assert!(questions[1].text.starts_with("Q2:"));
        assert!(questions[2].text.starts_with("Q3:"));
    }
}
