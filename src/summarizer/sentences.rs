use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::frequency::{FrequencyModel, tokenize};

// @module: Sentence segmentation and scoring

// @const: Abbreviations whose trailing period does not end a sentence
static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "st", "vs", "etc", "e.g", "i.e",
        "fig", "no", "inc", "ltd", "co", "dept", "est", "approx",
    ]
    .into_iter()
    .collect()
});

/// An ordered span of the working text with its stable source-order index
/// and accumulated importance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    /// Sentence text with terminal punctuation preserved
    pub text: String,

    /// Source-order index; selection ties break toward the earlier index
    pub index: usize,

    /// Sum of frequency-model weights of the constituent tokens
    pub score: f64,
}

/// Segment text into sentences, preserving terminal punctuation.
///
/// Boundaries are runs of `.`, `!` or `?`, except a period that follows a
/// known abbreviation or a single-letter initial, or one that sits inside
/// a decimal number. Text after the last boundary forms a final sentence,
/// so a transcript without punctuation yields one sentence.
pub fn segment(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != '.' && c != '!' && c != '?' {
            i += 1;
            continue;
        }

        if c == '.' && is_non_terminal_period(&chars, start, i) {
            i += 1;
            continue;
        }

        // Swallow the whole punctuation run ("?!", "...")
        let mut end = i + 1;
        while end < chars.len() && matches!(chars[end], '.' | '!' | '?') {
            end += 1;
        }

        let sentence: String = chars[start..end].iter().collect();
        let sentence = sentence.trim().to_string();
        if sentence.chars().any(char::is_alphanumeric) {
            sentences.push(sentence);
        }

        start = end;
        i = end;
    }

    if start < chars.len() {
        let tail: String = chars[start..].iter().collect();
        let tail = tail.trim().to_string();
        if tail.chars().any(char::is_alphanumeric) {
            sentences.push(tail);
        }
    }

    sentences
}

// @validates: Whether the period at `period` ends a sentence
fn is_non_terminal_period(chars: &[char], start: usize, period: usize) -> bool {
    // Decimal number, digit on both sides
    if period > start
        && period + 1 < chars.len()
        && chars[period - 1].is_ascii_digit()
        && chars[period + 1].is_ascii_digit()
    {
        return true;
    }

    // Word immediately before the period, including internal periods ("e.g")
    let mut word_start = period;
    while word_start > start
        && (chars[word_start - 1].is_alphanumeric() || chars[word_start - 1] == '.')
    {
        word_start -= 1;
    }
    let word: String = chars[word_start..period]
        .iter()
        .collect::<String>()
        .to_lowercase();

    if word.is_empty() {
        return false;
    }

    // Single-letter initials ("J. Smith")
    if word.chars().count() == 1 && word.chars().all(|ch| ch.is_alphabetic()) {
        return true;
    }

    ABBREVIATIONS.contains(word.as_str())
}

/// Segment the working text and score each sentence by aggregate token
/// importance.
///
/// Tokens absent from the model contribute zero; a sentence whose every
/// token is unscored keeps score 0.0 and stays eligible for selection so
/// sentence-count accounting remains consistent.
pub fn segment_and_score(text: &str, model: &FrequencyModel) -> Vec<ScoredSentence> {
    segment(text)
        .into_iter()
        .enumerate()
        .map(|(index, sentence)| {
            let score = tokenize(&sentence).map(|token| model.weight(&token)).sum();
            ScoredSentence {
                text: sentence,
                index,
                score,
            }
        })
        .collect()
}
