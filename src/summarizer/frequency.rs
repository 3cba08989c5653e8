use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::stopwords::StopwordFilter;
use crate::errors::SummarizeError;

// @module: Per-token importance weighting

// @const: Word token regex - letters/digits with optional internal apostrophes
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:'[\p{L}\p{N}]+)*").unwrap()
});

/// Extract lowercase word tokens from text.
///
/// Tokenizes on whitespace and sentence-internal word boundaries; pure
/// punctuation never yields a token.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD_REGEX
        .find_iter(text)
        .map(|token| token.as_str().to_lowercase())
}

/// Per-token importance weighting derived from normalized occurrence counts.
///
/// The most frequent token has weight exactly 1.0; every other weight is
/// `raw_count / max_raw_count`. Stop-words and punctuation are never keys.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    /// Lowercase token -> weight in [0.0, 1.0]
    weights: HashMap<String, f64>,
}

impl FrequencyModel {
    /// Build a frequency model over normalized text.
    ///
    /// Fails with `NoScorableContent` when no token survives stop-word
    /// filtering - there is no maximum to normalize by.
    pub fn build(text: &str, stopwords: &StopwordFilter) -> Result<Self, SummarizeError> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokenize(text) {
            if stopwords.is_stopword(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }

        let max_count = counts
            .values()
            .copied()
            .max()
            .ok_or(SummarizeError::NoScorableContent)?;

        let weights = counts
            .into_iter()
            .map(|(token, count)| (token, f64::from(count) / f64::from(max_count)))
            .collect();

        Ok(Self { weights })
    }

    /// Weight of a lowercase token; tokens absent from the model contribute zero
    pub fn weight(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    /// Check whether a token is scored by the model
    pub fn contains(&self, token: &str) -> bool {
        self.weights.contains_key(token)
    }

    /// Number of scored tokens
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the model is empty
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
