use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Translator;
use crate::errors::ProviderError;

/// Client for a LibreTranslate-compatible translation service
#[derive(Debug)]
pub struct LibreTranslate {
    /// Base URL of the translation API
    base_url: String,
    /// API key, empty for keyless instances
    api_key: String,
    /// HTTP client for making requests
    client: Client,
}

/// Translate request for the LibreTranslate API
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// Text to translate
    q: &'a str,
    /// Source language code
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// Input format, always plain text here
    format: &'static str,
    /// API key, omitted when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Translate response from the LibreTranslate API
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl LibreTranslate {
    /// Create a new client for the given endpoint
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout_secs: u64) -> Self {
        LibreTranslate {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl Translator for LibreTranslate {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/translate", self.base_url);
        let request = TranslateRequest {
            q: text,
            source: source_lang,
            target: target_lang,
            format: "text",
            api_key: if self.api_key.is_empty() {
                None
            } else {
                Some(&self.api_key)
            },
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
            error!("Translation API error ({}): {}", status, body);

            return Err(match status.as_u16() {
                401 | 403 => ProviderError::AuthenticationError(body),
                429 => ProviderError::RateLimitExceeded(body),
                code => ProviderError::ApiError {
                    status_code: code,
                    message: body,
                },
            });
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(parsed.translated_text)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let url = format!("{}/languages", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::ApiError {
                status_code: response.status().as_u16(),
                message: "language list request failed".to_string(),
            })
        }
    }
}
