//! Feature Vector - Classifier input built from a request body

use serde_json::{Map, Value};

use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};

/// Malformed feature value in the request body
#[derive(Debug, thiserror::Error)]
#[error("Invalid value for '{key}': expected a number, got {found}")]
pub struct FeatureError {
    pub key: &'static str,
    pub found: String,
}

/// Fixed-order feature vector, ordered as `FEATURE_LAYOUT`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureVector {
    values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// Zeroed vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object. Absent or null keys default to zero;
    /// unknown keys are ignored.
    pub fn from_json(body: &Map<String, Value>) -> Result<Self, FeatureError> {
        let mut values = [0.0f32; FEATURE_COUNT];

        for (i, slot) in FEATURE_LAYOUT.iter().enumerate() {
            if let Some(value) = body.get(slot.key) {
                values[i] = coerce(slot.key, value)?;
            }
        }

        Ok(Self { values })
    }

    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    #[cfg(test)]
    pub fn get_by_key(&self, key: &str) -> Option<f32> {
        super::layout::feature_index(key).and_then(|i| self.get(i))
    }
}

fn coerce(key: &'static str, value: &Value) -> Result<f32, FeatureError> {
    let invalid = |found: &str| FeatureError { key, found: found.to_string() };

    let coerced = match value {
        Value::Null => 0.0,
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid("number"))? as f32,
        Value::Bool(b) => if *b { 1.0 } else { 0.0 },
        Value::String(s) => s.trim().parse::<f64>()
            .map_err(|_| invalid(&format!("string {:?}", s)))? as f32,
        Value::Array(_) => return Err(invalid("array")),
        Value::Object(_) => return Err(invalid("object")),
    };

    // NaN, inf, and values overflowing f32
    if !coerced.is_finite() {
        return Err(invalid(&format!("non-finite value {}", value)));
    }

    Ok(coerced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_body_is_zero_vector() {
        let vector = FeatureVector::from_json(&Map::new()).unwrap();
        assert_eq!(vector, FeatureVector::new());
        assert!(vector.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_all_fields_in_layout_order() {
        let body = object(json!({
            "nova": 2, "salt": 0.5, "protein": 8, "fiber": 3,
            "sat_fat": 1, "fat": 5, "sugar": 12, "energy": 250
        }));

        let vector = FeatureVector::from_json(&body).unwrap();
        let expected: [f32; FEATURE_COUNT] = [250.0, 12.0, 5.0, 1.0, 3.0, 8.0, 0.5, 2.0];
        assert_eq!(vector.as_array(), &expected);
    }

    #[test]
    fn test_partial_body_defaults_missing() {
        let body = object(json!({ "sugar": 40.5, "unrelated": "ignored" }));

        let vector = FeatureVector::from_json(&body).unwrap();
        assert_eq!(vector.get_by_key("sugar"), Some(40.5));
        assert_eq!(vector.get_by_key("energy"), Some(0.0));
        assert_eq!(vector.get_by_key("nova"), Some(0.0));
    }

    #[test]
    fn test_coercion() {
        let body = object(json!({
            "energy": "120.5", "fat": null, "nova": true, "salt": " 0.25 "
        }));

        let vector = FeatureVector::from_json(&body).unwrap();
        assert_eq!(vector.get_by_key("energy"), Some(120.5));
        assert_eq!(vector.get_by_key("fat"), Some(0.0));
        assert_eq!(vector.get_by_key("nova"), Some(1.0));
        assert_eq!(vector.get_by_key("salt"), Some(0.25));
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = FeatureVector::from_json(&object(json!({ "fat": "lots" }))).unwrap_err();
        assert_eq!(err.key, "fat");

        let err = FeatureVector::from_json(&object(json!({ "fiber": [1, 2] }))).unwrap_err();
        assert_eq!(err.key, "fiber");
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_rejects_non_finite() {
        for (key, value) in [
            ("sugar", json!("NaN")),
            ("fat", json!("inf")),
            ("salt", json!("-infinity")),
            ("energy", json!(1e300)),
            ("protein", json!("1e39")),
        ] {
            let mut body = Map::new();
            body.insert(key.to_string(), value.clone());

            let err = FeatureVector::from_json(&body).unwrap_err();
            assert_eq!(err.key, key, "value: {}", value);
            assert!(err.to_string().contains("non-finite"));
        }
    }
}
