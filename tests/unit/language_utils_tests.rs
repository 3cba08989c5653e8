/*!
 * Tests for ISO language code handling
 */

use vidsum::language_utils::{
    get_language_name, language_codes_match, normalize_to_part1, validate_language_code,
};

/// 2-letter codes normalize to themselves
#[test]
fn test_normalize_to_part1_withTwoLetterCode_shouldReturnSameCode() {
    assert_eq!(normalize_to_part1("en").unwrap(), "en");
    assert_eq!(normalize_to_part1("fr").unwrap(), "fr");
}

/// 3-letter codes collapse to their 2-letter form
#[test]
fn test_normalize_to_part1_withThreeLetterCode_shouldReturnTwoLetterCode() {
    assert_eq!(normalize_to_part1("eng").unwrap(), "en");
    assert_eq!(normalize_to_part1("deu").unwrap(), "de");
}

/// Case and surrounding whitespace are ignored
#[test]
fn test_normalize_to_part1_withMixedCase_shouldNormalize() {
    assert_eq!(normalize_to_part1(" EN ").unwrap(), "en");
    assert_eq!(normalize_to_part1("Spa").unwrap(), "es");
}

/// Unknown codes are rejected
#[test]
fn test_normalize_to_part1_withUnknownCode_shouldFail() {
    assert!(normalize_to_part1("zz").is_err());
    assert!(normalize_to_part1("english").is_err());
    assert!(normalize_to_part1("").is_err());
}

/// Validation accepts what normalization accepts
#[test]
fn test_validate_language_code_withValidCodes_shouldAccept() {
    assert!(validate_language_code("en").is_ok());
    assert!(validate_language_code("fra").is_ok());
    assert!(validate_language_code("qq").is_err());
}

/// 2- and 3-letter forms of one language match
#[test]
fn test_language_codes_match_withEquivalentForms_shouldMatch() {
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("de", "deu"));
    assert!(language_codes_match("fr", "FR"));
}

/// Different languages never match, and unknown codes never match anything
#[test]
fn test_language_codes_match_withDifferentLanguages_shouldNotMatch() {
    assert!(!language_codes_match("en", "fr"));
    assert!(!language_codes_match("en", "zz"));
    assert!(!language_codes_match("", ""));
}

/// Names resolve through either code form
#[test]
fn test_get_language_name_withKnownCodes_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("deu").unwrap(), "German");
}
