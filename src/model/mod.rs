//! Model Module - classifier, label encoder and their startup loader

pub mod classifier;
pub mod encoder;
pub mod loader;
#[cfg(feature = "onnx")]
pub mod onnx;
pub mod predictor;

pub use classifier::{Classifier, InferenceError};
pub use encoder::LabelEncoder;
pub use predictor::Predictor;
