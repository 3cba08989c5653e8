/*!
 * Error types for the vidsum application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors reported by a caption source collaborator
#[derive(Error, Debug)]
pub enum CaptionError {
    /// The video exists but its owner disabled captions
    #[error("captions are disabled for this video")]
    Disabled,

    /// No caption track matches the requested language
    #[error("no caption track found for the requested language")]
    NotFound,

    /// The caption source could not be reached or answered abnormally
    #[error("caption source unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Failure kinds a single summarization request can end with.
///
/// Every component failure is surfaced to the caller with its kind intact;
/// the pipeline never falls back to partial results.
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// The caption sequence was empty or normalized to an empty transcript
    #[error("transcript is empty")]
    EmptyTranscript,

    /// Every token was filtered out as a stop-word or punctuation
    #[error("transcript contains no scorable content")]
    NoScorableContent,

    /// The caption source reported captions as disabled
    #[error("transcripts are disabled for this video")]
    TranscriptsDisabled,

    /// The caption source has no track for the requested language
    #[error("no transcript found for this video")]
    NoTranscriptFound,

    /// The caption source failed for another reason
    #[error("transcript unavailable: {0}")]
    TranscriptUnavailable(String),

    /// The translation collaborator failed
    #[error("translation unavailable: {0}")]
    TranslationUnavailable(String),

    /// The abstractive model collaborator failed
    #[error("abstractive model unavailable: {0}")]
    ModelUnavailable(String),

    /// The requested compression percent is outside the allowed set
    #[error("invalid compression percent: {0} (allowed: 10, 20, 30, 40, 50)")]
    InvalidCompression(u8),
}

impl SummarizeError {
    /// Stable identifier for the failure kind, used in logs and by callers
    /// that render actionable messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyTranscript => "EmptyTranscript",
            Self::NoScorableContent => "NoScorableContent",
            Self::TranscriptsDisabled => "TranscriptsDisabled",
            Self::NoTranscriptFound => "NoTranscriptFound",
            Self::TranscriptUnavailable(_) => "TranscriptUnavailable",
            Self::TranslationUnavailable(_) => "TranslationUnavailable",
            Self::ModelUnavailable(_) => "ModelUnavailable",
            Self::InvalidCompression(_) => "InvalidCompressionRequest",
        }
    }
}

impl From<CaptionError> for SummarizeError {
    fn from(error: CaptionError) -> Self {
        match error {
            CaptionError::Disabled => Self::TranscriptsDisabled,
            CaptionError::NotFound => Self::NoTranscriptFound,
            CaptionError::Unavailable(reason) => Self::TranscriptUnavailable(reason),
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a caption source
    #[error("Caption error: {0}")]
    Caption(#[from] CaptionError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a summarization request
    #[error("Summarization error: {0}")]
    Summarize(#[from] SummarizeError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
