/*!
 * Tests for the failure taxonomy
 */

use vidsum::errors::{AppError, CaptionError, ProviderError, SummarizeError};

/// Every failure kind renders a stable identifier
#[test]
fn test_kind_withEveryVariant_shouldReturnStableIdentifier() {
    assert_eq!(SummarizeError::EmptyTranscript.kind(), "EmptyTranscript");
    assert_eq!(SummarizeError::NoScorableContent.kind(), "NoScorableContent");
    assert_eq!(
        SummarizeError::TranscriptsDisabled.kind(),
        "TranscriptsDisabled"
    );
    assert_eq!(
        SummarizeError::NoTranscriptFound.kind(),
        "NoTranscriptFound"
    );
    assert_eq!(
        SummarizeError::TranscriptUnavailable("x".to_string()).kind(),
        "TranscriptUnavailable"
    );
    assert_eq!(
        SummarizeError::TranslationUnavailable("x".to_string()).kind(),
        "TranslationUnavailable"
    );
    assert_eq!(
        SummarizeError::ModelUnavailable("x".to_string()).kind(),
        "ModelUnavailable"
    );
    assert_eq!(
        SummarizeError::InvalidCompression(25).kind(),
        "InvalidCompressionRequest"
    );
}

/// Caption failures convert onto their transcript-level counterparts
#[test]
fn test_from_caption_error_shouldMapOntoTranscriptKinds() {
    assert!(matches!(
        SummarizeError::from(CaptionError::Disabled),
        SummarizeError::TranscriptsDisabled
    ));
    assert!(matches!(
        SummarizeError::from(CaptionError::NotFound),
        SummarizeError::NoTranscriptFound
    ));
    match SummarizeError::from(CaptionError::Unavailable("endpoint down".to_string())) {
        SummarizeError::TranscriptUnavailable(reason) => assert_eq!(reason, "endpoint down"),
        other => panic!("Expected TranscriptUnavailable, got {:?}", other),
    }
}

/// Display messages are actionable on their own
#[test]
fn test_display_withCommonVariants_shouldDescribeFailure() {
    assert_eq!(
        SummarizeError::EmptyTranscript.to_string(),
        "transcript is empty"
    );
    assert_eq!(
        SummarizeError::InvalidCompression(25).to_string(),
        "invalid compression percent: 25 (allowed: 10, 20, 30, 40, 50)"
    );
    assert_eq!(
        CaptionError::Disabled.to_string(),
        "captions are disabled for this video"
    );
}

/// Provider API errors carry the status code in their message
#[test]
fn test_provider_error_display_withApiError_shouldIncludeStatusCode() {
    let error = ProviderError::ApiError {
        status_code: 429,
        message: "slow down".to_string(),
    };

    assert_eq!(error.to_string(), "API responded with error: 429 - slow down");
}

/// The application error wraps the lower-level taxonomies
#[test]
fn test_app_error_withWrappedErrors_shouldPrefixSource() {
    let caption: AppError = CaptionError::NotFound.into();
    assert!(caption.to_string().starts_with("Caption error:"));

    let summarize: AppError = SummarizeError::EmptyTranscript.into();
    assert!(summarize.to_string().starts_with("Summarization error:"));

    let io: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    assert!(io.to_string().starts_with("File error:"));
}
