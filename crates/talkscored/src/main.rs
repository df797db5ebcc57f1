//! The talkscore service binary: settings, provider client, HTTP server.

#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use talkscore_deepgram::{DeepgramClient, DeepgramConfig};
use talkscore_server::{AppState, router};
use talkscore_settings::{TalkscoreSettings, load_settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings_path = std::env::var_os("TALKSCORE_SETTINGS").map(PathBuf::from);
    let settings = load_settings(settings_path.as_deref()).context("loading settings")?;

    if settings.deepgram.api_key.is_none() {
        warn!("DEEPGRAM_API_KEY is not set; analysis requests will fail until it is configured");
    }

    let state = AppState::new(
        Arc::new(DeepgramClient::new(deepgram_config(&settings))),
        settings.server.max_audio_bytes,
    );
    let app = router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, model = %settings.deepgram.model, "talkscored listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;
    Ok(())
}

/// Map the settings section onto the provider client configuration.
fn deepgram_config(settings: &TalkscoreSettings) -> DeepgramConfig {
    DeepgramConfig {
        api_key: settings.deepgram.api_key.clone(),
        base_url: settings.deepgram.base_url.clone(),
        model: settings.deepgram.model.clone(),
        language: settings.deepgram.language.clone(),
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => warn!(error = %e, "failed to install ctrl-c handler"),
    }
}
