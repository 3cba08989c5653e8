/*!
 * Extractive summarization components.
 *
 * This module contains the statistical core of the crate:
 * - `stopwords`: fixed per-language stop-word reference sets
 * - `frequency`: per-token importance weighting over normalized text
 * - `sentences`: language-aware segmentation and sentence scoring
 * - `selector`: top-k sentence selection under a compression ratio
 *
 * All artifacts built here are request-scoped; a frequency model is built
 * fresh per request and discarded after scoring.
 */

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

pub mod frequency;
pub mod selector;
pub mod sentences;
pub mod stopwords;

pub use frequency::FrequencyModel;
pub use selector::{CompressionPercent, select_extract};
pub use sentences::{ScoredSentence, segment, segment_and_score};
pub use stopwords::StopwordFilter;

/// Summarization mode requested by the caller
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    /// Select top-scoring sentences under a compression ratio
    #[default]
    Extractive,
    /// Return the full normalized transcript for display as subtitles
    Subtitles,
    /// Condense the transcript through the abstractive model collaborator
    Abstractive,
}

impl SummaryMode {
    // @returns: Lowercase mode identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Extractive => "extractive".to_string(),
            Self::Subtitles => "subtitles".to_string(),
            Self::Abstractive => "abstractive".to_string(),
        }
    }
}

impl std::fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for SummaryMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "extractive" => Ok(Self::Extractive),
            "subtitles" => Ok(Self::Subtitles),
            "abstractive" => Ok(Self::Abstractive),
            _ => Err(anyhow!("Invalid summary mode: {}", s)),
        }
    }
}

/// Whether the final text is a selected subset or a full/condensed transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    /// A subset of original sentences in source order
    Extractive,
    /// A complete or model-condensed transcript
    Subtitles,
}

/// The terminal artifact of a summarization request, immutable once produced
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryResult {
    /// What the text represents
    pub kind: SummaryKind,

    /// Final display string
    pub text: String,

    /// Number of whitespace-delimited words in `text`
    pub word_count: usize,
}
