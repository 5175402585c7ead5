use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use voxbridge::{create_router, AppState, Config, WsSpeechProvider};

#[derive(Debug, Parser)]
#[command(name = "voxbridge", about = "Real-time speech session service")]
struct Cli {
    /// Path to the configuration file, without extension
    #[arg(long, default_value = "config/voxbridge")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("{} v0.1.0", cfg.service.name);
    info!(
        "Locale defaults: source={}, targets={:?}",
        cfg.speech.source_language, cfg.speech.target_languages
    );

    let state = AppState::new(Arc::new(WsSpeechProvider::new()), cfg.speech);
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
