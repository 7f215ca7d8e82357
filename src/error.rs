//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::features::FeatureError;
use crate::model::InferenceError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Model/encoder failed to load at startup
    ModelUnavailable,

    // Malformed request
    ValidationError(String),

    // Classifier or encoder failed on a request
    PredictionError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ModelUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Model or encoder not loaded. Server might be misconfigured or files are missing.",
            ),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::PredictionError(msg) => {
                tracing::error!("Prediction error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred during prediction")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<FeatureError> for AppError {
    fn from(err: FeatureError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::PredictionError(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::ModelUnavailable.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::ValidationError("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(InferenceError("boom".into())).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
