use std::time::Duration;

use clap::Parser;
use eyre::{Result, eyre};
use log::info;

mod cli;

use cli::Cli;

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = ytsum::config::Config::load().unwrap_or_default();

    let api_key = std::env::var("GEMINI_API_KEY")
        .map_err(|_| eyre!("GEMINI_API_KEY is not set in environment variables"))?;

    // CLI flags take priority over config file
    let bind = cli.bind.or(config.bind).unwrap_or_else(|| DEFAULT_BIND.to_string());
    let model = cli
        .model
        .or(config.model)
        .unwrap_or_else(|| ytsum::gemini::DEFAULT_MODEL.to_string());
    let chunk_size = cli
        .chunk_size
        .or(config.chunk_size)
        .unwrap_or(ytsum::chunk::DEFAULT_CHUNK_SIZE);
    let timeout_secs = cli.timeout_secs.or(config.timeout_secs).unwrap_or(DEFAULT_TIMEOUT_SECS);

    if cli.verbose {
        let config_path = ytsum::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        eprintln!("Model: {model}");
        eprintln!("Chunk size: {chunk_size}");
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;

    let state = ytsum::server::AppState {
        provider: ytsum::youtube::CaptionScraper::new(client.clone()),
        pipeline: ytsum::summarize::SummaryPipeline::new(
            ytsum::gemini::GeminiClient::new(client, api_key, model),
            chunk_size,
        ),
    };

    let app = ytsum::server::router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("Listening on {bind}");
    axum::serve(listener, app).await?;

    Ok(())
}
