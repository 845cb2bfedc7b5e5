//! Conversation title derivation from the first user message.
//!
//! Pure and deterministic. Leading interrogative/auxiliary words are peeled off
//! one by one ("What is the capital of France?" → "The capital of France"),
//! trailing `? ! .` runs are dropped, the result is clamped to six words and 40
//! characters, and the first character is capitalized. Inputs shorter than three
//! characters, or results that reduce to nothing, fall back to the default.

use nova_core::DEFAULT_TITLE;

const QUESTION_WORDS: &[&str] = &[
    "how", "what", "when", "where", "why", "who", "can", "could", "would", "should", "will",
    "do", "does", "did", "is", "are", "was", "were", "have", "has", "had",
];

const MAX_WORDS: usize = 6;
const MAX_CHARS: usize = 40;

/// Derives a chatroom title from the first user message.
pub fn generate_title(first_message: &str) -> String {
    if first_message.chars().count() < 3 {
        return DEFAULT_TITLE.to_string();
    }

    let mut clean = first_message.trim();
    while let Some(rest) = strip_leading_question_word(clean) {
        clean = rest;
    }
    let clean = clean.trim_end_matches(['?', '!', '.']).trim();

    let title: String = clean
        .split_whitespace()
        .take(MAX_WORDS)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        return DEFAULT_TITLE.to_string();
    }

    let title = if title.chars().count() > MAX_CHARS {
        let mut t: String = title.chars().take(MAX_CHARS - 3).collect();
        t.push_str("...");
        t
    } else {
        title
    };

    capitalize_first(&title)
}

/// Strips one leading question/auxiliary word and the whitespace after it.
/// The word must be followed by whitespace ("whatever" is left alone).
fn strip_leading_question_word(text: &str) -> Option<&str> {
    for word in QUESTION_WORDS {
        let (Some(head), Some(tail)) = (text.get(..word.len()), text.get(word.len()..)) else {
            continue;
        };
        if head.eq_ignore_ascii_case(word) && tail.starts_with(char::is_whitespace) {
            return Some(tail.trim_start());
        }
    }
    None
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
