//! Nutrition Classifier Server
//!
//! Serves a pre-trained nutrition classifier over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  NUTRITION CLASSIFIER                    │
//! ├──────────────────────────────────────────────────────────┤
//! │  POST /predict ──► FeatureVector ──► Classifier (ONNX)   │
//! │                                          │               │
//! │  {"prediction"} ◄── LabelEncoder ◄───────┘               │
//! │                                                          │
//! │  Artifacts loaded once at startup, shared via Arc        │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod model;
#[cfg(test)]
mod testing;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// `None` when artifacts failed to load
    pub predictor: Option<Arc<model::Predictor>>,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/model", get(handlers::model::info))
        .route("/predict", post(handlers::predict::predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
