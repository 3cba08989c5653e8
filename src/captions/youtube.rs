use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use super::{CaptionFragment, CaptionSource};
use crate::errors::CaptionError;

/// Caption source backed by the YouTube timedtext endpoint.
///
/// Requests the caption track in the `json3` wire format and converts its
/// timed events into `CaptionFragment`s. HTTP failures are folded into the
/// `CaptionError` taxonomy: a 403 means the video owner disabled captions,
/// a 404 or an empty body means no track exists for the requested language,
/// and anything else is reported as unavailable.
#[derive(Debug)]
pub struct YouTubeCaptions {
    /// Base URL of the timedtext endpoint
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

/// Top-level timedtext response in json3 format
#[derive(Debug, Deserialize)]
struct TimedTextResponse {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

/// One timed event; display events carry text segments
#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs")]
    start_ms: u64,
    #[serde(rename = "dDurationMs")]
    duration_ms: Option<u64>,
    #[serde(default)]
    segs: Vec<TimedTextSegment>,
}

/// One text segment within an event
#[derive(Debug, Deserialize)]
struct TimedTextSegment {
    #[serde(default, rename = "utf8")]
    text: String,
}

impl YouTubeCaptions {
    /// Create a new client against the public timedtext endpoint
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        YouTubeCaptions {
            base_url: base_url.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }
}

/// Parse a json3 timedtext body into caption fragments.
///
/// Events without text segments (window styling, cue positioning) are
/// skipped. Newlines inside a segment are collapsed to spaces so each
/// fragment is a single line of spoken text.
pub fn parse_timedtext(body: &str) -> Result<Vec<CaptionFragment>, CaptionError> {
    if body.trim().is_empty() {
        return Err(CaptionError::NotFound);
    }

    let response: TimedTextResponse = serde_json::from_str(body)
        .map_err(|e| CaptionError::Unavailable(format!("unexpected timedtext payload: {}", e)))?;

    let mut fragments = Vec::with_capacity(response.events.len());
    for event in response.events {
        let text = event
            .segs
            .iter()
            .map(|seg| seg.text.as_str())
            .collect::<String>()
            .replace('\n', " ")
            .trim()
            .to_string();

        if text.is_empty() {
            continue;
        }

        let mut fragment = CaptionFragment::new(text, event.start_ms as f64 / 1000.0);
        if let Some(duration_ms) = event.duration_ms {
            fragment = fragment.with_duration(duration_ms as f64 / 1000.0);
        }
        fragments.push(fragment);
    }

    if fragments.is_empty() {
        return Err(CaptionError::NotFound);
    }

    Ok(fragments)
}

#[async_trait]
impl CaptionSource for YouTubeCaptions {
    async fn fetch_captions(
        &self,
        media_id: &str,
        language_hint: &str,
    ) -> Result<Vec<CaptionFragment>, CaptionError> {
        let url = format!(
            "{}?v={}&lang={}&fmt=json3",
            self.base_url, media_id, language_hint
        );

        debug!("Fetching captions: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CaptionError::Unavailable(e.to_string()))?;

        let status = response.status();
        match status {
            StatusCode::FORBIDDEN => return Err(CaptionError::Disabled),
            StatusCode::NOT_FOUND => return Err(CaptionError::NotFound),
            status if !status.is_success() => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to get error response text".to_string());
                error!("Timedtext endpoint error ({}): {}", status, body);
                return Err(CaptionError::Unavailable(format!(
                    "timedtext endpoint returned {}",
                    status
                )));
            }
            _ => {}
        }

        let body = response
            .text()
            .await
            .map_err(|e| CaptionError::Unavailable(e.to_string()))?;

        parse_timedtext(&body)
    }
}
