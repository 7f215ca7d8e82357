//! Label encoder - class index ↔ category label

use serde::Deserialize;

use super::classifier::InferenceError;

/// Fitted label encoder: class index `i` decodes to `classes[i]`
///
/// On disk: `{"classes": ["healthy", "moderate", "unhealthy"]}`
#[derive(Debug, Clone, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Decode a class index back to its label
    pub fn inverse_transform(&self, index: i64) -> Result<&str, InferenceError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.classes.get(i))
            .map(String::as_str)
            .ok_or_else(|| InferenceError(format!(
                "Unseen class index {} (encoder knows {} classes)",
                index,
                self.classes.len()
            )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> LabelEncoder {
        LabelEncoder::new(vec!["healthy".into(), "moderate".into(), "unhealthy".into()])
    }

    #[test]
    fn test_inverse_transform() {
        let enc = encoder();
        assert_eq!(enc.inverse_transform(0).unwrap(), "healthy");
        assert_eq!(enc.inverse_transform(1).unwrap(), "moderate");
        assert_eq!(enc.inverse_transform(2).unwrap(), "unhealthy");
    }

    #[test]
    fn test_unseen_index() {
        let enc = encoder();
        assert!(enc.inverse_transform(3).is_err());
        assert!(enc.inverse_transform(-1).is_err());
    }

    #[test]
    fn test_from_json() {
        let enc = LabelEncoder::from_json(br#"{"classes": ["a", "b"]}"#).unwrap();
        assert_eq!(enc.classes(), ["a", "b"]);
        assert!(!enc.is_empty());

        assert!(LabelEncoder::from_json(b"[\"a\"]").is_err());
        assert!(LabelEncoder::from_json(b"not json").is_err());
    }
}
