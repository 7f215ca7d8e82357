//! Prediction handler

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::{AppState, AppError, AppResult};
use crate::features::FeatureVector;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: String,
}

/// Classify a nutrition profile
///
/// Body is parsed by hand so malformed JSON gets the same error shape as
/// every other failure.
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<PredictResponse>> {
    let predictor = state.predictor.as_ref().ok_or(AppError::ModelUnavailable)?;

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::ValidationError(format!("Invalid JSON body: {}", e)))?;

    let Value::Object(fields) = payload else {
        return Err(AppError::ValidationError(
            "Invalid input format. Expected JSON object.".to_string(),
        ));
    };

    let features = FeatureVector::from_json(&fields)?;
    let prediction = predictor.predict(&features)?;

    Ok(Json(PredictResponse { prediction }))
}
