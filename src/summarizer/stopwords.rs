use std::collections::HashSet;
use stop_words::{LANGUAGE, get};

/// Fixed stop-word reference set for a working language.
///
/// Word lists come from the `stop-words` crate and are treated as
/// configuration data; callers can extend them with their own entries but
/// the filter never derives words from the transcript itself.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stop-words (lowercase)
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::for_language("en")
    }
}

impl StopwordFilter {
    /// Create a stop-word filter for the given language code.
    ///
    /// Unknown languages fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => LANGUAGE::English,
            "de" | "deu" | "german" => LANGUAGE::German,
            "fr" | "fra" | "french" => LANGUAGE::French,
            "es" | "spa" | "spanish" => LANGUAGE::Spanish,
            "it" | "ita" | "italian" => LANGUAGE::Italian,
            "pt" | "por" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "nld" | "dutch" => LANGUAGE::Dutch,
            "ru" | "rus" | "russian" => LANGUAGE::Russian,
            "sv" | "swe" | "swedish" => LANGUAGE::Swedish,
            "pl" | "pol" | "polish" => LANGUAGE::Polish,
            "tr" | "tur" | "turkish" => LANGUAGE::Turkish,
            "ar" | "ara" | "arabic" => LANGUAGE::Arabic,
            "hi" | "hin" | "hindi" => LANGUAGE::Hindi,
            _ => LANGUAGE::English,
        };

        Self {
            stopwords: get(lang).into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Create a filter from an explicit word list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add extra stop-words to the filter
    pub fn add_words(&mut self, words: &[String]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stop-word (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of stop-words in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
