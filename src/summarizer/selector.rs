use std::cmp::Ordering;

use super::sentences::ScoredSentence;
use crate::errors::SummarizeError;

// @module: Extractive sentence selection

/// A validated compression ratio for an extractive summary.
///
/// Only the values 10, 20, 30, 40 and 50 are accepted; anything else fails
/// with `InvalidCompression`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionPercent(u8);

impl CompressionPercent {
    /// The allowed compression ratios
    pub const ALLOWED: [u8; 5] = [10, 20, 30, 40, 50];

    /// Validate a raw percent value
    pub fn new(percent: u8) -> Result<Self, SummarizeError> {
        if Self::ALLOWED.contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(SummarizeError::InvalidCompression(percent))
        }
    }

    /// The raw percent value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Number of sentences to keep out of `total`.
    ///
    /// `round(total * percent / 100)`, never less than 1.
    pub fn target_count(&self, total: usize) -> usize {
        let rounded = (total as f64 * f64::from(self.0) / 100.0).round() as usize;
        rounded.max(1)
    }
}

impl Default for CompressionPercent {
    fn default() -> Self {
        Self(30)
    }
}

impl TryFrom<u8> for CompressionPercent {
    type Error = SummarizeError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl std::fmt::Display for CompressionPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Choose the top-scoring sentences under the requested compression ratio
/// and concatenate them, separated by a single space, in original source
/// order.
///
/// Score determines membership; source order determines presentation. Ties
/// in score break toward the earlier source index, so selection is
/// deterministic and stable under repeated runs on identical input. An
/// empty sentence sequence fails with `EmptyTranscript` - segmentation can
/// legitimately yield zero sentences on punctuation-only input.
pub fn select_extract(
    sentences: &[ScoredSentence],
    percent: CompressionPercent,
) -> Result<String, SummarizeError> {
    if sentences.is_empty() {
        return Err(SummarizeError::EmptyTranscript);
    }

    let k = percent.target_count(sentences.len());

    let mut ranked: Vec<&ScoredSentence> = sentences.iter().collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.index.cmp(&b.index))
    });

    let mut picked: Vec<&ScoredSentence> = ranked.into_iter().take(k).collect();
    picked.sort_by_key(|sentence| sentence.index);

    Ok(picked
        .iter()
        .map(|sentence| sentence.text.as_str())
        .collect::<Vec<_>>()
        .join(" "))
}
