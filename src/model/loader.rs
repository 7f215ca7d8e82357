//! Model Loader - reads classifier and encoder artifacts at startup

use std::path::Path;
use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::config::Config;
use super::classifier::Classifier;
use super::encoder::LabelEncoder;
use super::predictor::{ArtifactInfo, ArtifactSource, Predictor};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid label encoder '{path}': {source}")]
    InvalidEncoder {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Label encoder '{0}' has no classes")]
    EmptyEncoder(String),

    #[error("Invalid classifier '{path}': {message}")]
    InvalidClassifier { path: String, message: String },
}

/// Load both artifacts and assemble a predictor
pub fn load_predictor(model_path: &Path, encoder_path: &Path) -> Result<Predictor, ArtifactError> {
    let model_bytes = read_artifact(model_path)?;
    let encoder_bytes = read_artifact(encoder_path)?;

    let encoder = LabelEncoder::from_json(&encoder_bytes)
        .map_err(|source| ArtifactError::InvalidEncoder {
            path: encoder_path.display().to_string(),
            source,
        })?;
    if encoder.is_empty() {
        return Err(ArtifactError::EmptyEncoder(encoder_path.display().to_string()));
    }

    let classifier = build_classifier(model_path, &model_bytes)?;

    let artifacts = ArtifactInfo {
        classifier: ArtifactSource {
            path: model_path.display().to_string(),
            sha256: sha256_hex(&model_bytes),
        },
        encoder: ArtifactSource {
            path: encoder_path.display().to_string(),
            sha256: sha256_hex(&encoder_bytes),
        },
        loaded_at: chrono::Utc::now(),
    };

    Ok(Predictor::new(classifier, encoder).with_artifacts(artifacts))
}

/// Load at startup. Failure is logged and leaves predictions disabled.
pub fn init(config: &Config) -> Option<Arc<Predictor>> {
    tracing::info!(
        "Loading model from {} and encoder from {}",
        config.model_path.display(),
        config.encoder_path.display()
    );

    match load_predictor(&config.model_path, &config.encoder_path) {
        Ok(predictor) => {
            tracing::info!(
                "Models loaded successfully ({} backend, {} classes)",
                predictor.backend(),
                predictor.encoder().classes().len()
            );
            Some(Arc::new(predictor))
        }
        Err(e) => {
            tracing::error!("Model loading failed, predictions disabled: {}", e);
            None
        }
    }
}

fn read_artifact(path: &Path) -> Result<Vec<u8>, ArtifactError> {
    std::fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(feature = "onnx")]
fn build_classifier(path: &Path, bytes: &[u8]) -> Result<Box<dyn Classifier>, ArtifactError> {
    super::onnx::OnnxClassifier::from_bytes(bytes)
        .map(|c| Box::new(c) as Box<dyn Classifier>)
        .map_err(|e| ArtifactError::InvalidClassifier {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

#[cfg(not(feature = "onnx"))]
fn build_classifier(path: &Path, _bytes: &[u8]) -> Result<Box<dyn Classifier>, ArtifactError> {
    Err(ArtifactError::InvalidClassifier {
        path: path.display().to_string(),
        message: "built without the `onnx` feature".to_string(),
    })
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
