/*!
 * Application controller.
 *
 * Wires the configuration to concrete collaborator clients, builds the
 * summarization pipeline, and drives a single request from the CLI: parse
 * the media id, look up the video title for display, summarize, print.
 */

use anyhow::{Context, Result};
use log::{info, warn};
use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::captions::{YouTubeCaptions, parse_media_id};
use crate::pipeline::{Pipeline, SummaryRequest};
use crate::providers::libretranslate::LibreTranslate;
use crate::providers::ollama::Ollama;
use crate::summarizer::{CompressionPercent, StopwordFilter, SummaryKind};

/// Timeout for the best-effort title lookup
const TITLE_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Main application controller
pub struct Controller {
    /// Application configuration
    config: Config,

    /// Summarization pipeline wired to HTTP collaborators
    pipeline: Pipeline,
}

impl Controller {
    /// Create a controller from a validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let captions = YouTubeCaptions::new(&config.captions.endpoint, config.captions.timeout_secs);
        let translator = LibreTranslate::new(
            &config.translation.endpoint,
            &config.translation.api_key,
            config.translation.timeout_secs,
        );
        let abstractive = Ollama::new(
            &config.abstractive.endpoint,
            &config.abstractive.model,
            config.abstractive.timeout_secs,
        );

        let mut stopwords = StopwordFilter::for_language(&config.target_language);
        stopwords.add_words(&config.summary.extra_stopwords);

        let pipeline = Pipeline::new(Arc::new(captions), Arc::new(translator), Arc::new(abstractive))
            .with_languages(&config.source_language, &config.target_language)
            .with_stopwords(stopwords)
            .with_filler_markers(config.summary.filler_markers.clone())
            .with_abstractive_max_words(config.summary.abstractive_max_words);

        Ok(Controller { config, pipeline })
    }

    /// Run one summarization request for a watch URL or bare video id
    pub async fn run(&self, input: &str) -> Result<()> {
        let media_id = parse_media_id(input)?;

        if let Some(title) = self.fetch_video_title(&media_id).await {
            info!("{}", title);
        }

        let percent = CompressionPercent::new(self.config.summary.percent)?;
        let request = SummaryRequest::new(self.config.summary.mode).with_percent(percent);

        let result = self
            .pipeline
            .summarize(&media_id, &request)
            .await
            .map_err(|e| anyhow::anyhow!("{} ({})", e, e.kind()))?;

        println!("{}", result.text);

        let label = match result.kind {
            SummaryKind::Extractive => "extractive summary",
            SummaryKind::Subtitles => "subtitles",
        };
        info!("Produced {}: {} words", label, result.word_count);

        Ok(())
    }

    /// Best-effort title lookup from the watch page; failures are non-fatal
    async fn fetch_video_title(&self, media_id: &str) -> Option<String> {
        let url = format!("https://www.youtube.com/watch?v={}", media_id);

        let client = Client::builder()
            .timeout(TITLE_LOOKUP_TIMEOUT)
            .build()
            .ok()?;

        let html = match client.get(&url).send().await {
            Ok(response) => response.text().await.ok()?,
            Err(e) => {
                warn!("Title lookup failed: {}", e);
                return None;
            }
        };

        extract_title(&html)
    }
}

/// Pull the page title out of a watch page document
fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;

    let title = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>()
        .replace("&amp;", "&")
        .trim()
        .to_string();

    if title.is_empty() { None } else { Some(title) }
}
