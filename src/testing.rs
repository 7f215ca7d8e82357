//! Test helpers: stub classifier and router drivers

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use parking_lot::Mutex;
use serde_json::Value;
use tower::ServiceExt;

use crate::features::{FeatureVector, FEATURE_COUNT};
use crate::model::{Classifier, InferenceError, LabelEncoder, Predictor};
use crate::{create_router, AppState};

type Seen = Arc<Mutex<Vec<[f32; FEATURE_COUNT]>>>;

/// Classifier with a fixed outcome that records every vector it receives
pub struct StubClassifier {
    outcome: Result<i64, String>,
    seen: Seen,
}

impl StubClassifier {
    pub fn returning(index: i64) -> Self {
        Self { outcome: Ok(index), seen: Seen::default() }
    }

    pub fn failing(message: &str) -> Self {
        Self { outcome: Err(message.to_string()), seen: Seen::default() }
    }

    pub fn seen(&self) -> Seen {
        Arc::clone(&self.seen)
    }
}

impl Classifier for StubClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<i64, InferenceError> {
        self.seen.lock().push(*features.as_array());
        self.outcome.clone().map_err(InferenceError)
    }

    fn backend(&self) -> &'static str {
        "stub"
    }
}

/// 0 → healthy, 1 → moderate, 2 → unhealthy
pub fn state_with(classifier: StubClassifier) -> AppState {
    let encoder = LabelEncoder::new(vec![
        "healthy".to_string(),
        "moderate".to_string(),
        "unhealthy".to_string(),
    ]);

    AppState {
        predictor: Some(Arc::new(Predictor::new(Box::new(classifier), encoder))),
    }
}

pub fn state_without_model() -> AppState {
    AppState { predictor: None }
}

pub async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(state, request).await
}

pub async fn post_json(state: AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(state, uri, &body.to_string()).await
}

pub async fn post_raw(state: AppState, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(state, request).await
}

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = create_router(state).oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
