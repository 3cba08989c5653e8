use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::language_utils;
use crate::summarizer::{CompressionPercent, SummaryMode};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO), the language captions are fetched in
    #[serde(default = "default_language")]
    pub source_language: String,

    /// Target language code (ISO), the working language of the output
    #[serde(default = "default_language")]
    pub target_language: String,

    /// Summarization settings
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Caption source settings
    #[serde(default)]
    pub captions: CaptionsConfig,

    /// Translation service settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Abstractive model settings
    #[serde(default)]
    pub abstractive: AbstractiveConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Summarization settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummaryConfig {
    // @field: Default summarization mode
    #[serde(default)]
    pub mode: SummaryMode,

    // @field: Compression percent for extractive summaries
    #[serde(default = "default_percent")]
    pub percent: u8,

    // @field: Fragment texts dropped as filler during normalization
    #[serde(default = "default_filler_markers")]
    pub filler_markers: Vec<String>,

    // @field: Extra stop-words merged into the bundled list
    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    // @field: Soft word cap for abstractive summaries
    #[serde(default = "default_abstractive_max_words")]
    pub abstractive_max_words: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            mode: SummaryMode::default(),
            percent: default_percent(),
            filler_markers: default_filler_markers(),
            extra_stopwords: Vec::new(),
            abstractive_max_words: default_abstractive_max_words(),
        }
    }
}

/// Caption source settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CaptionsConfig {
    /// Timedtext endpoint URL
    #[serde(default = "default_captions_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CaptionsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_captions_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Translation service settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Service endpoint URL (a LibreTranslate-compatible API)
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translation_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Abstractive model settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AbstractiveConfig {
    /// Ollama endpoint URL
    #[serde(default = "default_abstractive_endpoint")]
    pub endpoint: String,

    /// Model name (e.g., "llama3.2:3b")
    #[serde(default = "default_abstractive_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_abstractive_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AbstractiveConfig {
    fn default() -> Self {
        Self {
            endpoint: default_abstractive_endpoint(),
            model: default_abstractive_model(),
            timeout_secs: default_abstractive_timeout_secs(),
        }
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_language(),
            target_language: default_language(),
            summary: SummaryConfig::default(),
            captions: CaptionsConfig::default(),
            translation: TranslationConfig::default(),
            abstractive: AbstractiveConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            anyhow!(
                "Failed to open config file {:?}: {}",
                path.as_ref(),
                e
            )
        })?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path.as_ref(), e))?;
        Ok(config)
    }

    /// Write this configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)
            .map_err(|e| anyhow!("Failed to write config file {:?}: {}", path.as_ref(), e))?;
        Ok(())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        language_utils::validate_language_code(&self.source_language)
            .map_err(|e| anyhow!("Invalid source language: {}", e))?;
        language_utils::validate_language_code(&self.target_language)
            .map_err(|e| anyhow!("Invalid target language: {}", e))?;

        CompressionPercent::new(self.summary.percent)
            .map_err(|e| anyhow!("Invalid summary percent: {}", e))?;

        if self.summary.abstractive_max_words == 0 {
            return Err(anyhow!("abstractive_max_words must be greater than zero"));
        }

        if self.captions.endpoint.is_empty() {
            return Err(anyhow!("Caption endpoint cannot be empty"));
        }
        if self.translation.endpoint.is_empty() {
            return Err(anyhow!("Translation endpoint cannot be empty"));
        }
        if self.abstractive.endpoint.is_empty() {
            return Err(anyhow!("Abstractive endpoint cannot be empty"));
        }

        Ok(())
    }
}

// Default value functions for serde

fn default_language() -> String {
    "en".to_string()
}

fn default_percent() -> u8 {
    30
}

fn default_filler_markers() -> Vec<String> {
    vec!["[Music]".to_string(), "[Applause]".to_string()]
}

fn default_abstractive_max_words() -> usize {
    150
}

fn default_captions_endpoint() -> String {
    "https://www.youtube.com/api/timedtext".to_string()
}

fn default_translation_endpoint() -> String {
    "http://localhost:5000".to_string()
}

fn default_abstractive_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_abstractive_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_abstractive_timeout_secs() -> u64 {
    120
}
