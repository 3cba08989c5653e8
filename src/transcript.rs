use crate::captions::CaptionFragment;
use crate::errors::SummarizeError;

// @module: Caption normalization

/// A filler-stripped, whitespace-joined transcript derived from caption fragments.
///
/// Invariant: `word_count` equals the number of whitespace-delimited tokens
/// in `text`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTranscript {
    /// The normalized transcript text
    pub text: String,

    /// Number of whitespace-delimited words in `text`
    pub word_count: usize,
}

impl NormalizedTranscript {
    /// Collapse an ordered sequence of caption fragments into a single clean
    /// text blob.
    ///
    /// Fragment texts are concatenated in timeline order, separated by a
    /// single space. Fragments whose text equals one of `filler_markers`
    /// (e.g. a literal `[Music]` tag) are dropped. An empty input sequence,
    /// or one that normalizes to empty text, fails with `EmptyTranscript`
    /// since downstream scoring is undefined on empty input.
    pub fn from_fragments(
        fragments: &[CaptionFragment],
        filler_markers: &[String],
    ) -> Result<Self, SummarizeError> {
        if fragments.is_empty() {
            return Err(SummarizeError::EmptyTranscript);
        }

        let mut parts: Vec<&str> = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            let text = fragment.text.trim();
            if text.is_empty() || filler_markers.iter().any(|marker| marker == text) {
                continue;
            }
            parts.push(text);
        }

        Self::from_text(parts.join(" "))
    }

    /// Build a transcript from already-normalized text, recomputing the word
    /// count. Used when translation replaces the working text.
    pub fn from_text(text: impl Into<String>) -> Result<Self, SummarizeError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(SummarizeError::EmptyTranscript);
        }

        let word_count = text.split_whitespace().count();
        Ok(Self { text, word_count })
    }
}
