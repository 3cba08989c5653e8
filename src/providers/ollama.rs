use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::AbstractiveModel;
use crate::errors::ProviderError;

/// Ollama client used as the abstractive summarization collaborator.
///
/// The model itself is opaque: the client sends the transcript with a
/// summarization instruction and a soft word cap, and returns whatever
/// text the model generates.
#[derive(Debug)]
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: String,
    /// Model name to generate with
    model: String,
    /// HTTP client for making requests
    client: Client,
}

/// Generate request for the Ollama API
#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    /// Model name to use for generation
    model: &'a str,
    /// Prompt to generate from
    prompt: String,
    /// Whether to stream the response
    stream: bool,
    /// Additional model parameters
    options: GenerationOptions,
}

/// Generation options for the Ollama API
#[derive(Debug, Serialize)]
struct GenerationOptions {
    /// Temperature for generation, kept low for faithful condensation
    temperature: f32,
}

/// Generation response from the Ollama API
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    /// Generated text
    response: String,
}

impl Ollama {
    /// Create a new Ollama client
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout_secs: u64) -> Self {
        Ollama {
            base_url: base_url.into(),
            model: model.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl AbstractiveModel for Ollama {
    async fn summarize(&self, text: &str, max_words: usize) -> Result<String, ProviderError> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerationRequest {
            model: &self.model,
            prompt: format!(
                "Summarize the following video transcript in at most {} words. \
                 Reply with the summary only.\n\n{}",
                max_words, text
            ),
            stream: false,
            options: GenerationOptions { temperature: 0.2 },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Ollama API error ({}): {}", status, body);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        match serde_json::from_str::<GenerationResponse>(&body) {
            Ok(parsed) => Ok(parsed.response.trim().to_string()),
            Err(e) => {
                // The server may answer in JSONL when streaming was not
                // honored; concatenate the per-line response pieces.
                let mut full_response = String::new();
                for line in body.lines().filter(|line| !line.is_empty()) {
                    if let Ok(value) = serde_json::from_str::<serde_json::Value>(line) {
                        if let Some(part) = value.get("response").and_then(|v| v.as_str()) {
                            full_response.push_str(part);
                        }
                    }
                }

                if full_response.is_empty() {
                    Err(ProviderError::ParseError(e.to_string()))
                } else {
                    Ok(full_response.trim().to_string())
                }
            }
        }
    }
}
