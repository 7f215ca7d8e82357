//! ONNX Runtime classifier backend
//!
//! Expects a graph with one `float32[N, 8]` input and an `int64` class index
//! output. Graphs exported from scikit-learn name it `label` and add a
//! `probabilities` output, which is ignored.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use parking_lot::Mutex;

use crate::features::{FeatureVector, FEATURE_COUNT};
use super::classifier::{Classifier, InferenceError};

const LABEL_OUTPUT: &str = "label";

pub struct OnnxClassifier {
    // Session::run needs &mut
    session: Mutex<Session>,
    output_name: String,
}

impl OnnxClassifier {
    /// Build a session from serialized model bytes
    pub fn from_bytes(model_bytes: &[u8]) -> Result<Self, InferenceError> {
        let session = Session::builder()
            .map_err(|e| InferenceError(format!("Session builder error: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError(format!("Optimization error: {}", e)))?
            .commit_from_memory(model_bytes)
            .map_err(|e| InferenceError(format!("Failed to load model: {}", e)))?;

        let output_name = session.outputs.iter()
            .find(|o| o.name == LABEL_OUTPUT)
            .or_else(|| session.outputs.first())
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError("No output defined".to_string()))?;

        tracing::debug!("ONNX classifier ready (output: {})", output_name);

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<i64, InferenceError> {
        let input_array = Array2::<f32>::from_shape_vec(
            (1, FEATURE_COUNT),
            features.as_slice().to_vec(),
        ).map_err(|e| InferenceError(format!("Array error: {}", e)))?;

        let input_tensor = Tensor::from_array(input_array)
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session.run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        let output = outputs.get(self.output_name.as_str())
            .ok_or_else(|| InferenceError(format!("Missing output '{}'", self.output_name)))?;

        let (_, labels) = output.try_extract_tensor::<i64>()
            .map_err(|e| InferenceError(format!("Extract error: {}", e)))?;

        let label = labels.first().copied();
        label.ok_or_else(|| InferenceError("Empty label output".to_string()))
    }

    fn backend(&self) -> &'static str {
        "onnx"
    }
}
