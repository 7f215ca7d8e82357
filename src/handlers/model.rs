//! Model info handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppState, AppError, AppResult};
use crate::features::LayoutInfo;
use crate::model::predictor::{ArtifactInfo, PredictorStats};

#[derive(Serialize)]
pub struct ModelInfoResponse {
    backend: &'static str,
    classes: Vec<String>,
    artifacts: Option<ArtifactInfo>,
    layout: LayoutInfo,
    stats: PredictorStats,
}

/// Describe the loaded classifier and encoder
pub async fn info(State(state): State<AppState>) -> AppResult<Json<ModelInfoResponse>> {
    let predictor = state.predictor.as_ref().ok_or(AppError::ModelUnavailable)?;

    Ok(Json(ModelInfoResponse {
        backend: predictor.backend(),
        classes: predictor.encoder().classes().to_vec(),
        artifacts: predictor.artifacts().cloned(),
        layout: LayoutInfo::current(),
        stats: predictor.stats(),
    }))
}
