/*!
 * Tests for sentence segmentation and scoring
 */

use vidsum::summarizer::{FrequencyModel, StopwordFilter, segment, segment_and_score};

/// Terminal punctuation splits sentences and stays attached to them
#[test]
fn test_segment_withTerminalPunctuation_shouldSplitAndPreservePunctuation() {
    let sentences = segment("First point. Second point! Third point?");

    assert_eq!(
        sentences,
        vec!["First point.", "Second point!", "Third point?"]
    );
}

/// Runs of punctuation belong to one boundary
#[test]
fn test_segment_withPunctuationRuns_shouldTreatRunAsOneBoundary() {
    let sentences = segment("Seriously?! It worked... Good.");

    assert_eq!(sentences, vec!["Seriously?!", "It worked...", "Good."]);
}

/// Known abbreviations do not end a sentence
#[test]
fn test_segment_withAbbreviation_shouldNotSplitAfterIt() {
    let sentences = segment("Dr. Lee spoke first. Prof. Chen replied.");

    assert_eq!(
        sentences,
        vec!["Dr. Lee spoke first.", "Prof. Chen replied."]
    );
}

/// Single-letter initials do not end a sentence
#[test]
fn test_segment_withInitials_shouldNotSplitAfterThem() {
    let sentences = segment("J. Smith arrived late. Everyone noticed.");

    assert_eq!(sentences, vec!["J. Smith arrived late.", "Everyone noticed."]);
}

/// Decimal points inside numbers are not boundaries
#[test]
fn test_segment_withDecimalNumber_shouldNotSplitInsideNumber() {
    let sentences = segment("It grew by 3.5 percent. Impressive.");

    assert_eq!(sentences, vec!["It grew by 3.5 percent.", "Impressive."]);
}

/// Text without terminal punctuation forms a single sentence
#[test]
fn test_segment_withNoPunctuation_shouldYieldOneSentence() {
    let sentences = segment("captions often arrive with no punctuation at all");

    assert_eq!(sentences.len(), 1);
}

/// Trailing text after the last boundary is kept as a final sentence
#[test]
fn test_segment_withUnterminatedTail_shouldKeepTail() {
    let sentences = segment("A full sentence. and then a trailing fragment");

    assert_eq!(
        sentences,
        vec!["A full sentence.", "and then a trailing fragment"]
    );
}

/// Punctuation-only input yields no sentences
#[test]
fn test_segment_withOnlyPunctuation_shouldYieldNothing() {
    let sentences = segment("... ?! .");

    assert!(sentences.is_empty());
}

/// Sentence scores are sums of the model weights of their tokens
#[test]
fn test_segment_and_score_withKnownWeights_shouldSumTokenWeights() {
    let stopwords = StopwordFilter::from_list(&["the", "a"]);
    // comet appears twice -> weight 1.0; tail and glow -> 0.5 each
    let text = "The comet has a tail. The comet has a glow.";
    let model = FrequencyModel::build(text, &stopwords).unwrap();

    let scored = segment_and_score(text, &model);

    assert_eq!(scored.len(), 2);
    assert_eq!(scored[0].index, 0);
    assert_eq!(scored[1].index, 1);
    // has appears twice as well, weight 1.0
    assert!((scored[0].score - (1.0 + 1.0 + 0.5)).abs() < 1e-9);
    assert!((scored[1].score - (1.0 + 1.0 + 0.5)).abs() < 1e-9);
}

/// A sentence made only of unscored tokens keeps score zero but stays eligible
#[test]
fn test_segment_and_score_withUnscoredSentence_shouldKeepItAtZero() {
    let stopwords = StopwordFilter::from_list(&[]);
    let model = FrequencyModel::build("rockets are loud", &stopwords).unwrap();

    let scored = segment_and_score("Rockets are loud. Entirely different clause.", &model);

    assert_eq!(scored.len(), 2);
    assert!(scored[1].score.abs() < 1e-9);
}

/// Source-order indexes are dense and stable
#[test]
fn test_segment_and_score_withManySentences_shouldIndexInSourceOrder() {
    let stopwords = StopwordFilter::from_list(&[]);
    let text = "One. Two. Three. Four.";
    let model = FrequencyModel::build(text, &stopwords).unwrap();

    let scored = segment_and_score(text, &model);

    let indexes: Vec<usize> = scored.iter().map(|s| s.index).collect();
    assert_eq!(indexes, vec![0, 1, 2, 3]);
}
