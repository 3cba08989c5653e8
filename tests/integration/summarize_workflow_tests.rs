/*!
 * End-to-end tests for the summarization workflow over mocked collaborators
 */

use vidsum::pipeline::SummaryRequest;
use vidsum::summarizer::{CompressionPercent, StopwordFilter, SummaryKind, SummaryMode};

use crate::common::mock_collaborators::MockCaptionSource;
use crate::common::test_pipeline;

fn talk_texts() -> Vec<&'static str> {
    vec![
        "welcome to the channel.",
        "[Music]",
        "today we look at rust and why rust feels different.",
        "ownership makes rust memory safe without a garbage collector.",
        "the borrow checker enforces ownership at compile time.",
        "many teams adopt rust for reliability.",
        "[Applause]",
        "thanks for watching.",
    ]
}

/// A realistic transcript produces an extractive summary that is a strict
/// subset of the input sentences, in source order
#[tokio::test]
async fn test_workflow_withExtractiveMode_shouldSelectSourceOrderSubset() {
    let pipeline = test_pipeline(MockCaptionSource::with_texts(&talk_texts()))
        .with_filler_markers(vec!["[Music]".to_string(), "[Applause]".to_string()]);
    let request = SummaryRequest::new(SummaryMode::Extractive)
        .with_percent(CompressionPercent::new(30).unwrap());

    let result = pipeline.summarize("talk01", &request).await.unwrap();

    assert_eq!(result.kind, SummaryKind::Extractive);
    // 30% of 6 sentences rounds to 2
    let summary_sentences: Vec<&str> = result
        .text
        .split_inclusive(". ")
        .map(|s| s.trim())
        .collect();
    assert_eq!(summary_sentences.len(), 2);

    // Each selected sentence appears verbatim in the source, and their
    // relative order matches the source order
    let full_transcript = talk_texts().join(" ");
    let mut last_position = 0;
    for sentence in &summary_sentences {
        let position = full_transcript
            .find(sentence)
            .unwrap_or_else(|| panic!("'{}' not found in transcript", sentence));
        assert!(position >= last_position, "summary out of source order");
        last_position = position;
    }
}

/// Larger ratios never lose sentences a smaller ratio selected
#[tokio::test]
async fn test_workflow_withIncreasingRatios_shouldGrowMonotonically() {
    let request = SummaryRequest::new(SummaryMode::Extractive);

    let mut previous_word_count = 0;
    for value in CompressionPercent::ALLOWED {
        let pipeline = test_pipeline(MockCaptionSource::with_texts(&talk_texts()))
            .with_filler_markers(vec!["[Music]".to_string(), "[Applause]".to_string()]);
        let request = request.with_percent(CompressionPercent::new(value).unwrap());

        let result = pipeline.summarize("talk01", &request).await.unwrap();

        assert!(
            result.word_count >= previous_word_count,
            "{}% summary shrank below the previous ratio",
            value
        );
        previous_word_count = result.word_count;
    }
}

/// Subtitles mode returns the whole cleaned transcript with fillers removed
#[tokio::test]
async fn test_workflow_withSubtitlesMode_shouldDropFillerFragments() {
    let pipeline = test_pipeline(MockCaptionSource::with_texts(&talk_texts()))
        .with_filler_markers(vec!["[Music]".to_string(), "[Applause]".to_string()]);
    let request = SummaryRequest::new(SummaryMode::Subtitles);

    let result = pipeline.summarize("talk01", &request).await.unwrap();

    assert_eq!(result.kind, SummaryKind::Subtitles);
    assert!(!result.text.contains("[Music]"));
    assert!(!result.text.contains("[Applause]"));
    assert!(result.text.starts_with("welcome to the channel."));
    assert!(result.text.ends_with("thanks for watching."));
}

/// A transcript that normalizes to pure stop-words cannot be summarized
#[tokio::test]
async fn test_workflow_withStopWordOnlyTranscript_shouldFailCleanly() {
    let pipeline = test_pipeline(MockCaptionSource::with_texts(&[
        "it is what it is.",
        "and so it was.",
    ]));
    let request = SummaryRequest::new(SummaryMode::Extractive);

    let result = pipeline.summarize("talk01", &request).await;

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().kind(), "NoScorableContent");
}

/// The pipeline can be driven from synchronous code through a blocking
/// runtime handle
#[test]
fn test_workflow_withBlockingInvocation_shouldProduceSummary() {
    let pipeline = test_pipeline(MockCaptionSource::with_texts(&talk_texts()))
        .with_filler_markers(vec!["[Music]".to_string(), "[Applause]".to_string()]);
    let request = SummaryRequest::new(SummaryMode::Subtitles);

    let result = tokio_test::block_on(async { pipeline.summarize("talk01", &request).await });

    let summary = result.unwrap();
    assert!(summary.word_count > 0);
    assert!(summary.text.contains("ownership"));
}

/// The same transcript and settings always produce the same summary
#[tokio::test]
async fn test_workflow_withRepeatedRequests_shouldBeDeterministic() {
    let request = SummaryRequest::new(SummaryMode::Extractive)
        .with_percent(CompressionPercent::new(20).unwrap());

    let first = test_pipeline(MockCaptionSource::with_texts(&talk_texts()))
        .summarize("talk01", &request)
        .await
        .unwrap();
    let second = test_pipeline(MockCaptionSource::with_texts(&talk_texts()))
        .summarize("talk01", &request)
        .await
        .unwrap();

    assert_eq!(first.text, second.text);

    // Per-language stop-word construction does not change the outcome
    let third = test_pipeline(MockCaptionSource::with_texts(&talk_texts()))
        .with_stopwords(StopwordFilter::for_language("en"))
        .summarize("talk01", &request)
        .await
        .unwrap();
    assert_eq!(first.text, third.text);
}
