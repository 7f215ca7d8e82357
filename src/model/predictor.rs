//! Predictor - classifier + encoder pair shared by all requests

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::features::FeatureVector;
use super::classifier::{Classifier, InferenceError};
use super::encoder::LabelEncoder;

/// Where an artifact was loaded from
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactSource {
    pub path: String,
    pub sha256: String,
}

/// Provenance of a loaded predictor
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactInfo {
    pub classifier: ArtifactSource,
    pub encoder: ArtifactSource,
    pub loaded_at: DateTime<Utc>,
}

/// Served prediction counters
#[derive(Debug, Clone, Serialize)]
pub struct PredictorStats {
    pub inference_count: u64,
    pub avg_latency_ms: f32,
}

/// Immutable after construction; counters are atomics
pub struct Predictor {
    classifier: Box<dyn Classifier>,
    encoder: LabelEncoder,
    artifacts: Option<ArtifactInfo>,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("backend", &self.classifier.backend())
            .field("classes", &self.encoder.classes())
            .field("artifacts", &self.artifacts)
            .finish()
    }
}

impl Predictor {
    pub fn new(classifier: Box<dyn Classifier>, encoder: LabelEncoder) -> Self {
        Self {
            classifier,
            encoder,
            artifacts: None,
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        }
    }

    pub fn with_artifacts(mut self, artifacts: ArtifactInfo) -> Self {
        self.artifacts = Some(artifacts);
        self
    }

    /// Classify a feature vector and decode the label
    pub fn predict(&self, features: &FeatureVector) -> Result<String, InferenceError> {
        let start_time = Instant::now();

        let index = self.classifier.predict(features)?;
        let label = self.encoder.inverse_transform(index)?.to_string();

        let elapsed_us = start_time.elapsed().as_micros() as u64;
        self.latency_sum_us.fetch_add(elapsed_us, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        tracing::debug!("Predicted '{}' (class {}) in {}us", label, index, elapsed_us);

        Ok(label)
    }

    pub fn backend(&self) -> &'static str {
        self.classifier.backend()
    }

    pub fn encoder(&self) -> &LabelEncoder {
        &self.encoder
    }

    pub fn artifacts(&self) -> Option<&ArtifactInfo> {
        self.artifacts.as_ref()
    }

    pub fn stats(&self) -> PredictorStats {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 { (sum as f32 / count as f32) / 1000.0 } else { 0.0 };

        PredictorStats {
            inference_count: count,
            avg_latency_ms: avg,
        }
    }
}
