/*!
 * Tests for caption normalization
 */

use vidsum::captions::CaptionFragment;
use vidsum::errors::SummarizeError;
use vidsum::transcript::NormalizedTranscript;

use crate::common::fragments_from_texts;

fn markers() -> Vec<String> {
    vec!["[Music]".to_string()]
}

/// Fragments are joined in timeline order with a single space
#[test]
fn test_from_fragments_withOrderedFragments_shouldJoinWithSingleSpace() {
    let fragments = fragments_from_texts(&["hello there", "general remarks", "good evening"]);

    let transcript = NormalizedTranscript::from_fragments(&fragments, &markers()).unwrap();

    assert_eq!(transcript.text, "hello there general remarks good evening");
    assert_eq!(transcript.word_count, 6);
}

/// Filler markers are dropped during normalization
#[test]
fn test_from_fragments_withFillerMarker_shouldDropMarkerFragments() {
    let fragments = fragments_from_texts(&["first part", "[Music]", "second part"]);

    let transcript = NormalizedTranscript::from_fragments(&fragments, &markers()).unwrap();

    assert_eq!(transcript.text, "first part second part");
    assert_eq!(transcript.word_count, 4);
}

/// Word count matches the whitespace-delimited token count of the text
#[test]
fn test_from_fragments_withUnevenWhitespace_shouldCountWordsFromJoinedText() {
    let fragments = fragments_from_texts(&["  padded   words  ", "more text"]);

    let transcript = NormalizedTranscript::from_fragments(&fragments, &markers()).unwrap();

    assert_eq!(
        transcript.word_count,
        transcript.text.split_whitespace().count()
    );
}

/// An empty fragment sequence fails instead of producing an empty transcript
#[test]
fn test_from_fragments_withNoFragments_shouldFailWithEmptyTranscript() {
    let result = NormalizedTranscript::from_fragments(&[], &markers());

    assert!(matches!(result, Err(SummarizeError::EmptyTranscript)));
}

/// A sequence that is entirely filler also normalizes to nothing
#[test]
fn test_from_fragments_withOnlyFillerFragments_shouldFailWithEmptyTranscript() {
    let fragments = fragments_from_texts(&["[Music]", "[Music]"]);

    let result = NormalizedTranscript::from_fragments(&fragments, &markers());

    assert!(matches!(result, Err(SummarizeError::EmptyTranscript)));
}

/// Whitespace-only fragments do not contribute separator noise
#[test]
fn test_from_fragments_withBlankFragments_shouldSkipThem() {
    let fragments = vec![
        CaptionFragment::new("start", 0.0),
        CaptionFragment::new("   ", 2.0),
        CaptionFragment::new("end", 4.0),
    ];

    let transcript = NormalizedTranscript::from_fragments(&fragments, &markers()).unwrap();

    assert_eq!(transcript.text, "start end");
}

/// Rebuilding from translated text recomputes the word count
#[test]
fn test_from_text_withTranslatedText_shouldRecomputeWordCount() {
    let transcript = NormalizedTranscript::from_text("three little words").unwrap();

    assert_eq!(transcript.word_count, 3);
}

/// Empty replacement text is rejected
#[test]
fn test_from_text_withEmptyText_shouldFailWithEmptyTranscript() {
    let result = NormalizedTranscript::from_text("   ");

    assert!(matches!(result, Err(SummarizeError::EmptyTranscript)));
}
