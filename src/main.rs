//! Nutrition Classifier server entry point

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nutrition_classifier::{config::Config, create_router, model, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "nutrition_classifier=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Nutrition Classifier v{} starting...", env!("CARGO_PKG_VERSION"));

    // Missing or corrupt artifacts leave the server up with predictions disabled
    let state = AppState {
        predictor: model::loader::init(&config),
    };

    let app = create_router(state);

    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
