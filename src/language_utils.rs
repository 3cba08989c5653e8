use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// The caption endpoint and the translation service both speak ISO 639-1
/// (2-letter) codes, so everything funnels through that form. 3-letter
/// ISO 639-3 codes are accepted on input and converted.
fn lookup(code: &str) -> Option<Language> {
    let normalized = code.trim().to_lowercase();
    match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    }
}

/// Normalize a language code to ISO 639-1 (2-letter) format
pub fn normalize_to_part1(code: &str) -> Result<String> {
    let language = lookup(code).ok_or_else(|| anyhow!("Invalid language code: {}", code))?;

    language
        .to_639_1()
        .map(|part1| part1.to_string())
        .ok_or_else(|| anyhow!("No ISO 639-1 form for language code: {}", code))
}

/// Validate that a code names a language this tool can work with
pub fn validate_language_code(code: &str) -> Result<()> {
    normalize_to_part1(code).map(|_| ())
}

/// Check if two language codes match (represent the same language)
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (lookup(code1), lookup(code2)) {
        (Some(first), Some(second)) => first == second,
        _ => false,
    }
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let language = lookup(code).ok_or_else(|| anyhow!("Invalid language code: {}", code))?;
    Ok(language.to_name().to_string())
}
