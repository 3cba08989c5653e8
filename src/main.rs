// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::Path;

use vidsum::app_config::{Config, LogLevel};
use vidsum::app_controller::Controller;
use vidsum::summarizer::SummaryMode;

/// CLI Wrapper for SummaryMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSummaryMode {
    Extractive,
    Subtitles,
    Abstractive,
}

impl From<CliSummaryMode> for SummaryMode {
    fn from(cli_mode: CliSummaryMode) -> Self {
        match cli_mode {
            CliSummaryMode::Extractive => SummaryMode::Extractive,
            CliSummaryMode::Subtitles => SummaryMode::Subtitles,
            CliSummaryMode::Abstractive => SummaryMode::Abstractive,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a video transcript (default command)
    #[command(alias = "sum")]
    Summarize(SummarizeArgs),

    /// Generate shell completions for vidsum
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SummarizeArgs {
    /// Video watch URL or bare video id
    #[arg(value_name = "VIDEO")]
    video: String,

    /// Summarization mode
    #[arg(short, long, value_enum)]
    mode: Option<CliSummaryMode>,

    /// Summary length as a percentage of the transcript (10, 20, 30, 40 or 50)
    #[arg(short, long)]
    percent: Option<u8>,

    /// Source language code (e.g., 'en', 'es', 'hi')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// vidsum - video transcript summarizer
///
/// Fetches a video's caption track, normalizes it into a clean transcript,
/// and produces either an extractive summary, display subtitles, or an
/// abstractive condensation.
#[derive(Parser, Debug)]
#[command(name = "vidsum")]
#[command(version = "0.1.0")]
#[command(about = "Extractive summaries and clean subtitles from video transcripts")]
#[command(long_about = "vidsum fetches a video's caption track and condenses it.

EXAMPLES:
    vidsum https://www.youtube.com/watch?v=TOosNVLqXZ8   # Extractive summary
    vidsum -m subtitles TOosNVLqXZ8                      # Full normalized transcript
    vidsum -m abstractive TOosNVLqXZ8                    # Model-condensed transcript
    vidsum -p 10 TOosNVLqXZ8                             # Shortest extractive summary
    vidsum -s hi -t en TOosNVLqXZ8                       # Hindi captions, English output
    vidsum completions bash > vidsum.bash                # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

MODES:
    extractive  - top-scoring sentences in source order (default)
    subtitles   - the full normalized (and translated) transcript
    abstractive - a generated condensation from the configured model")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Video watch URL or bare video id
    #[arg(value_name = "VIDEO")]
    video: Option<String>,

    /// Summarization mode
    #[arg(short, long, value_enum)]
    mode: Option<CliSummaryMode>,

    /// Summary length as a percentage of the transcript (10, 20, 30, 40 or 50)
    #[arg(short, long)]
    percent: Option<u8>,

    /// Source language code (e.g., 'en', 'es', 'hi')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "vidsum", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Summarize(args)) => run_summarize(args).await,
        None => {
            // Default behavior - use top-level args
            let video = cli
                .video
                .ok_or_else(|| anyhow!("VIDEO is required when no subcommand is specified"))?;

            let args = SummarizeArgs {
                video,
                mode: cli.mode,
                percent: cli.percent,
                source_language: cli.source_language,
                target_language: cli.target_language,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_summarize(args).await
        }
    }
}

async fn run_summarize(options: SummarizeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)
            .context(format!("Failed to load config file: {}", config_path))?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        config
            .save_to_file(config_path)
            .context(format!("Failed to write default config to: {}", config_path))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(mode) = &options.mode {
        config.summary.mode = mode.clone().into();
    }
    if let Some(percent) = options.percent {
        config.summary.percent = percent;
    }
    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    // Create controller and run the request
    let controller = Controller::with_config(config)?;
    controller.run(&options.video).await
}
