//! llm-platform demo server
//!
//! Axum server hosting the compiled landing page and the demo chat responder
//! its widget talks to.

mod config;
mod handlers;
mod replies;
mod router;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::replies::ReplyBook;
use crate::router::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment first so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let replies = ReplyBook::for_locale(config.locale);
    if replies.is_empty() {
        tracing::warn!("⚠ Reply book is empty - every answer will be a placeholder");
    } else {
        tracing::info!("Loaded {} canned replies ({})", replies.len(), config.locale);
    }

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "⚠ Static directory {} not found - landing page will 404",
            config.static_dir.display()
        );
        tracing::warn!("  Build the web crate with trunk and point STATIC_DIR at its output");
    }

    let state = AppState::new(replies, config.model.as_str());
    let app = build_router(state, Some(&config.static_dir));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("🚀 llm-platform server running on http://{}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health    - Health check");
    tracing::info!("  POST /api/chat  - Demo chat responder (model: {})", config.model);
    tracing::info!("  GET  /*         - Landing page from {}", config.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}
