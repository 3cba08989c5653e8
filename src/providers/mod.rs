/*!
 * Provider implementations for the pipeline's external collaborators.
 *
 * This module contains the collaborator traits the pipeline consumes and
 * client implementations for concrete services:
 * - LibreTranslate: machine translation over HTTP
 * - Ollama: abstractive summarization through a local LLM server
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Translation collaborator: text in one language, the same text in another.
///
/// Failure means the translation is unavailable; the pipeline never falls
/// back to showing untranslated text as if it were translated.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate `text` from `source_lang` into `target_lang` (ISO 639-1 codes)
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError>;

    /// Test the connection to the translation service
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

/// Abstractive summarization collaborator: text in, shorter text out.
///
/// The model is opaque to this crate; `max_words` is a soft length cap
/// passed through to the service.
#[async_trait]
pub trait AbstractiveModel: Send + Sync + Debug {
    /// Produce a condensed rendition of `text` of at most roughly `max_words` words
    async fn summarize(&self, text: &str, max_words: usize) -> Result<String, ProviderError>;
}

pub mod libretranslate;
pub mod ollama;
