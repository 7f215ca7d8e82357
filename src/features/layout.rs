//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the feature schema fed to the classifier.**
//!
//! ## Rules:
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! The order must match the column order the classifier was trained on.

use crc32fast::Hasher;
use serde::Serialize;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// One slot of the feature vector
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureSlot {
    /// Key read from the request body
    pub key: &'static str,
    /// Column name used during training
    pub column: &'static str,
}

/// Total number of features
pub const FEATURE_COUNT: usize = 8;

/// Feature slots in exact order they appear in the vector
pub const FEATURE_LAYOUT: [FeatureSlot; FEATURE_COUNT] = [
    FeatureSlot { key: "energy", column: "energy-kcal_100g" },      // 0
    FeatureSlot { key: "sugar", column: "sugars_100g" },            // 1
    FeatureSlot { key: "fat", column: "fat_100g" },                 // 2
    FeatureSlot { key: "sat_fat", column: "saturated-fat_100g" },   // 3
    FeatureSlot { key: "fiber", column: "fiber_100g" },             // 4
    FeatureSlot { key: "protein", column: "proteins_100g" },        // 5
    FeatureSlot { key: "salt", column: "salt_100g" },               // 6
    FeatureSlot { key: "nova", column: "nova_group" },              // 7: NOVA processing group
];

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over version and training column names, in order
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);

    for slot in FEATURE_LAYOUT.iter() {
        hasher.update(slot.column.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Layout description exposed by the model info endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: String,
    pub feature_count: usize,
    pub features: Vec<FeatureSlot>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: format!("{:08x}", layout_hash()),
            feature_count: FEATURE_COUNT,
            features: FEATURE_LAYOUT.to_vec(),
        }
    }
}

/// Get feature index by request key
#[cfg(test)]
pub fn feature_index(key: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|slot| slot.key == key)
}
