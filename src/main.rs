//! ytlens: YouTube channel and video analytics from the command line
//!
//! This is the main entry point for the application.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ytlens::config::Settings;
use ytlens::tools::{ChannelDemographics, CompetitorSearch, SortBy, VideoFetching, VideoPerformance};
use ytlens::YouTubeApi;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match args.first().map(|s| s.as_str()) {
        None | Some("-h") | Some("--help") | Some("help") => {
            print_usage();
            return Ok(());
        }
        Some("-V") | Some("--version") => {
            println!("ytlens v{}", ytlens::VERSION);
            return Ok(());
        }
        Some(command) => command,
    };

    // Load configuration
    let settings = load_settings()?;
    let api = YouTubeApi::new(&settings)?;
    let report = &settings.report;

    let output = match command {
        "demographics" => {
            let channel_id = args
                .get(1)
                .context("usage: ytlens demographics <channel-id>")?;
            ChannelDemographics::new(channel_id).run(&api, report).await?
        }
        "competitors" => {
            let query = args
                .get(1)
                .context("usage: ytlens competitors <query> [max-results] [threshold]")?;
            let mut tool = CompetitorSearch::new(query);
            if let Some(max) = args.get(2) {
                tool = tool.with_max_results(max.parse().context("invalid max-results")?);
            }
            if let Some(threshold) = args.get(3) {
                tool = tool.with_threshold(threshold.parse().context("invalid threshold")?);
            }
            tool.run(&api, report).await?
        }
        "videos" => {
            let channel_id = args
                .get(1)
                .context("usage: ytlens videos <channel-id> [max-results] [date|views]")?;
            let mut tool = VideoFetching::new(channel_id);
            if let Some(max) = args.get(2) {
                tool = tool.with_max_results(max.parse().context("invalid max-results")?);
            }
            if let Some(sort) = args.get(3) {
                let sort_by: SortBy = sort.parse().unwrap_or(SortBy::Date);
                tool = tool.with_sort(sort_by);
            }
            tool.run(&api, report).await?
        }
        "performance" => {
            let video_id = args
                .get(1)
                .context("usage: ytlens performance <video-id> [--no-comments]")?;
            let include_comments = !args.iter().any(|a| a == "--no-comments");
            VideoPerformance::new(video_id)
                .with_comments(include_comments)
                .run(&api, report)
                .await?
        }
        other => {
            print_usage();
            anyhow::bail!("unknown command '{}'", other);
        }
    };

    println!("{}", output);
    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("YTLENS_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    let paths = [
        PathBuf::from("ytlens.yml"),
        PathBuf::from("config/ytlens.yml"),
        dirs::config_dir()
            .map(|p| p.join("ytlens/ytlens.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
ytlens v{}
YouTube channel and video analytics toolkit

USAGE:
    ytlens <COMMAND> [ARGS]

COMMANDS:
    demographics <channel-id>                         Channel statistics report
    competitors  <query> [max-results] [threshold]    Find competing channels
    videos       <channel-id> [max-results] [sort]    List channel videos (sort: date|views)
    performance  <video-id> [--no-comments]           Video engagement analysis

OPTIONS:
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    YTLENS_SETTINGS_PATH   Path to ytlens.yml
    YTLENS_API_KEY         Data API key (YOUTUBE_API_KEY also honored)
    YTLENS_TIMEOUT         Request timeout in seconds
"#,
        ytlens::VERSION
    );
}
