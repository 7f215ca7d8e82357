//! Classifier seam
//!
//! Anything that maps a feature vector to a class index. The ONNX backend is
//! the production implementation; tests substitute stubs.

use crate::features::FeatureVector;

#[derive(Debug, thiserror::Error)]
#[error("InferenceError: {0}")]
pub struct InferenceError(pub String);

/// Trait for classifier backends (ONNX, stubs, ...)
pub trait Classifier: Send + Sync {
    /// Predict the class index for a single feature vector
    fn predict(&self, features: &FeatureVector) -> Result<i64, InferenceError>;

    /// Backend name reported by the model info endpoint
    fn backend(&self) -> &'static str;
}
