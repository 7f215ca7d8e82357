//! Feature extraction from prediction requests

pub mod layout;
pub mod vector;

pub use layout::{LayoutInfo, FEATURE_COUNT, FEATURE_LAYOUT};
pub use vector::{FeatureError, FeatureVector};
