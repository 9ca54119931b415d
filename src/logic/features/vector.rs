//! Feature Vector - the model input
//!
//! Values are stored in the order defined by `FEATURE_LAYOUT`. A vector is
//! built once by the encoder and never mutated afterwards.

use serde::Serialize;

use super::layout::{feature_index, FEATURE_COUNT, FEATURE_LAYOUT};

/// Ordered, immutable encoding of one student record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create from raw values already in layout order
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Get feature by column name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// (name, value) pairs for logging
    pub fn named_values(&self) -> Vec<(&'static str, f64)> {
        FEATURE_LAYOUT
            .iter()
            .copied()
            .zip(self.values.iter().copied())
            .collect()
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self::from_values(values)
    }
}
