/*!
 * Caption acquisition.
 *
 * This module defines the timed caption fragment produced by a captioning
 * source, the collaborator trait the pipeline consumes captions through,
 * and media id parsing for watch URLs.
 */

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::fmt::Debug;
use url::Url;

use crate::errors::CaptionError;

pub mod youtube;

pub use youtube::YouTubeCaptions;

/// One timed unit of spoken-word text as produced by a captioning source
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionFragment {
    /// Spoken-word text of this fragment
    pub text: String,

    /// Offset from the start of the video, in seconds
    pub start_seconds: f64,

    /// Duration of the fragment, when the source reports one
    pub duration_seconds: Option<f64>,
}

impl CaptionFragment {
    /// Create a new caption fragment
    pub fn new(text: impl Into<String>, start_seconds: f64) -> Self {
        CaptionFragment {
            text: text.into(),
            start_seconds,
            duration_seconds: None,
        }
    }

    /// Set the fragment duration
    pub fn with_duration(mut self, duration_seconds: f64) -> Self {
        self.duration_seconds = Some(duration_seconds);
        self
    }
}

/// Source of timed caption fragments for a piece of media
///
/// Implementations return fragments in timeline order. Failure kinds are
/// limited to the `CaptionError` taxonomy so the pipeline can surface them
/// verbatim.
#[async_trait]
pub trait CaptionSource: Send + Sync + Debug {
    /// Fetch the caption track for `media_id` in the hinted language
    async fn fetch_captions(
        &self,
        media_id: &str,
        language_hint: &str,
    ) -> Result<Vec<CaptionFragment>, CaptionError>;
}

/// Extract a video id from a watch URL, or pass a bare id through.
///
/// Recognizes `youtu.be/<id>` and `watch?v=<id>` URL forms.
pub fn parse_media_id(input: &str) -> Result<String> {
    let input = input.trim();

    if !input.contains("://") {
        if !input.is_empty()
            && input
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Ok(input.to_string());
        }
        return Err(anyhow!("Invalid video id: {}", input));
    }

    let url = Url::parse(input)?;
    match url.host_str() {
        Some("youtu.be") => {
            let id = url.path().trim_start_matches('/');
            if id.is_empty() {
                Err(anyhow!("No video id in URL: {}", input))
            } else {
                Ok(id.to_string())
            }
        }
        Some(_) => url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| anyhow!("No video id in URL: {}", input)),
        None => Err(anyhow!("Invalid video URL: {}", input)),
    }
}
