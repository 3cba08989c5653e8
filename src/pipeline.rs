/*!
 * Summarization pipeline orchestration.
 *
 * A request moves through a fixed sequence of stages:
 * Fetching -> Normalizing -> (Translating) -> Selecting XOR Abstracting -> Done | Failed.
 * Data flows strictly forward and every artifact is scoped to the request;
 * nothing is cached between invocations. Component failures are returned
 * verbatim with their kind - the pipeline performs no retries and no
 * silent fallbacks.
 */

use log::{debug, info, warn};
use std::fmt;
use std::sync::Arc;

use crate::captions::{CaptionFragment, CaptionSource};
use crate::errors::SummarizeError;
use crate::language_utils;
use crate::providers::{AbstractiveModel, Translator};
use crate::summarizer::{
    CompressionPercent, FrequencyModel, StopwordFilter, SummaryKind, SummaryMode, SummaryResult,
    segment_and_score, select_extract,
};
use crate::transcript::NormalizedTranscript;

/// Stage of a summarization request, used in logs and failure reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Delegating to the caption source collaborator
    Fetching,
    /// Collapsing caption fragments into a normalized transcript
    Normalizing,
    /// Invoking the translation collaborator
    Translating,
    /// Building the frequency model, scoring and selecting sentences
    Selecting,
    /// Delegating to the abstractive model collaborator
    Abstracting,
    /// A summary result was produced
    Done,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetching => "fetching",
            Self::Normalizing => "normalizing",
            Self::Translating => "translating",
            Self::Selecting => "selecting",
            Self::Abstracting => "abstracting",
            Self::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// Parameters of a single summarization request
#[derive(Debug, Clone, Copy)]
pub struct SummaryRequest {
    /// Requested summarization mode
    pub mode: SummaryMode,

    /// Compression ratio, used in extractive mode
    pub percent: CompressionPercent,
}

impl SummaryRequest {
    /// Create a request with the default compression ratio
    pub fn new(mode: SummaryMode) -> Self {
        SummaryRequest {
            mode,
            percent: CompressionPercent::default(),
        }
    }

    /// Set the compression ratio
    pub fn with_percent(mut self, percent: CompressionPercent) -> Self {
        self.percent = percent;
        self
    }
}

/// The summarization pipeline wired to its external collaborators.
///
/// One instance can serve many requests; each request runs start-to-finish
/// on the invoking task with no shared mutable state, so no locking
/// discipline is required.
#[derive(Debug)]
pub struct Pipeline {
    /// Caption source collaborator
    caption_source: Arc<dyn CaptionSource>,

    /// Translation collaborator
    translator: Arc<dyn Translator>,

    /// Abstractive model collaborator
    abstractive: Arc<dyn AbstractiveModel>,

    /// Stop-word reference set for the working language
    stopwords: StopwordFilter,

    /// Fragment texts treated as filler and dropped during normalization
    filler_markers: Vec<String>,

    /// Language the caption track is requested in
    source_language: String,

    /// Working language of the final output
    target_language: String,

    /// Soft word cap passed to the abstractive collaborator
    abstractive_max_words: usize,
}

impl Pipeline {
    /// Wire a pipeline to its collaborators, with English defaults
    pub fn new(
        caption_source: Arc<dyn CaptionSource>,
        translator: Arc<dyn Translator>,
        abstractive: Arc<dyn AbstractiveModel>,
    ) -> Self {
        Pipeline {
            caption_source,
            translator,
            abstractive,
            stopwords: StopwordFilter::default(),
            filler_markers: vec!["[Music]".to_string()],
            source_language: "en".to_string(),
            target_language: "en".to_string(),
            abstractive_max_words: 150,
        }
    }

    /// Set the caption source and working languages
    pub fn with_languages(
        mut self,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        self.source_language = source_language.into();
        self.target_language = target_language.into();
        self
    }

    /// Set the stop-word reference set
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set the filler marker list
    pub fn with_filler_markers(mut self, filler_markers: Vec<String>) -> Self {
        self.filler_markers = filler_markers;
        self
    }

    /// Set the soft word cap for abstractive summaries
    pub fn with_abstractive_max_words(mut self, max_words: usize) -> Self {
        self.abstractive_max_words = max_words;
        self
    }

    /// Run a full summarization request for a media id.
    ///
    /// Fetches captions through the caption source collaborator and hands
    /// the fragments to `summarize_fragments`. Caption source failures are
    /// mapped onto the transcript failure kinds.
    pub async fn summarize(
        &self,
        media_id: &str,
        request: &SummaryRequest,
    ) -> Result<SummaryResult, SummarizeError> {
        debug!(
            "{}: requesting '{}' captions for {}",
            PipelineStage::Fetching,
            self.source_language,
            media_id
        );
        let fragments = self
            .caption_source
            .fetch_captions(media_id, &self.source_language)
            .await?;

        self.summarize_fragments(fragments, request).await
    }

    /// Run the pipeline over an already-fetched caption sequence
    pub async fn summarize_fragments(
        &self,
        fragments: Vec<CaptionFragment>,
        request: &SummaryRequest,
    ) -> Result<SummaryResult, SummarizeError> {
        debug!(
            "{}: collapsing {} caption fragments",
            PipelineStage::Normalizing,
            fragments.len()
        );
        let mut transcript = NormalizedTranscript::from_fragments(&fragments, &self.filler_markers)?;

        if !language_utils::language_codes_match(&self.source_language, &self.target_language) {
            debug!(
                "{}: {} -> {}",
                PipelineStage::Translating,
                self.source_language,
                self.target_language
            );
            let translated = self
                .translator
                .translate(&transcript.text, &self.source_language, &self.target_language)
                .await
                .map_err(|e| SummarizeError::TranslationUnavailable(e.to_string()))?;
            transcript = NormalizedTranscript::from_text(translated)?;
        }

        let result = match request.mode {
            SummaryMode::Extractive => {
                debug!(
                    "{}: scoring {} words at {}",
                    PipelineStage::Selecting,
                    transcript.word_count,
                    request.percent
                );
                let model = FrequencyModel::build(&transcript.text, &self.stopwords)?;
                let sentences = segment_and_score(&transcript.text, &model);
                let text = select_extract(&sentences, request.percent)?;
                let word_count = text.split_whitespace().count();
                SummaryResult {
                    kind: SummaryKind::Extractive,
                    text,
                    word_count,
                }
            }
            SummaryMode::Subtitles => SummaryResult {
                kind: SummaryKind::Subtitles,
                text: transcript.text,
                word_count: transcript.word_count,
            },
            SummaryMode::Abstractive => {
                debug!(
                    "{}: requesting condensed text (max {} words)",
                    PipelineStage::Abstracting,
                    self.abstractive_max_words
                );
                let text = self
                    .abstractive
                    .summarize(&transcript.text, self.abstractive_max_words)
                    .await
                    .map_err(|e| SummarizeError::ModelUnavailable(e.to_string()))?;
                let text = text.trim().to_string();
                if text.is_empty() {
                    warn!("Abstractive model returned empty text");
                    return Err(SummarizeError::ModelUnavailable(
                        "model returned empty text".to_string(),
                    ));
                }
                let word_count = text.split_whitespace().count();
                SummaryResult {
                    kind: SummaryKind::Subtitles,
                    text,
                    word_count,
                }
            }
        };

        info!(
            "{}: produced {} words ({} mode)",
            PipelineStage::Done,
            result.word_count,
            request.mode
        );
        Ok(result)
    }
}
