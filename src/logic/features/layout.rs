//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! The order below is the column order of the training frame. The model
//! consumes a bare vector, so a reordering here corrupts every prediction
//! without raising an error.
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION and retrain
//! 2. Change order → increment FEATURE_VERSION and retrain
//! 3. Remove feature → increment FEATURE_VERSION and retrain

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    "Gender",                    // 0: Female=0, Male=1
    "AttendanceRate",            // 1: float
    "StudyHoursPerWeek",         // 2: float
    "PreviousGrade",             // 3: float
    "ExtracurricularActivities", // 4: integer count
    "ParentalSupport",           // 5: High=0, Low=1, Medium=2
    "Online Classes Taken",      // 6: False=0, True=1
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 7;

pub const GENDER: usize = 0;
pub const ATTENDANCE_RATE: usize = 1;
pub const STUDY_HOURS_PER_WEEK: usize = 2;
pub const PREVIOUS_GRADE: usize = 3;
pub const EXTRACURRICULAR_ACTIVITIES: usize = 4;
pub const PARENTAL_SUPPORT: usize = 5;
pub const ONLINE_CLASSES_TAKEN: usize = 6;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 of the version byte followed by every feature name, NUL separated
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }

    hasher.finalize()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Layout information reported by the model-info endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Column names declared by a model artifact disagree with this layout
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Feature layout mismatch: expected {expected:?}, got {actual:?}")]
pub struct LayoutMismatchError {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

/// Check column names declared by an artifact against the current layout
pub fn validate_feature_names(names: &[String]) -> Result<(), LayoutMismatchError> {
    let matches = names.len() == FEATURE_COUNT
        && names.iter().zip(FEATURE_LAYOUT).all(|(a, b)| a == b);

    if matches {
        Ok(())
    } else {
        Err(LayoutMismatchError {
            expected: LayoutInfo::current().feature_names,
            actual: names.to_vec(),
        })
    }
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 7);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_index_constants_match_names() {
        assert_eq!(feature_index("Gender"), Some(GENDER));
        assert_eq!(feature_index("AttendanceRate"), Some(ATTENDANCE_RATE));
        assert_eq!(feature_index("StudyHoursPerWeek"), Some(STUDY_HOURS_PER_WEEK));
        assert_eq!(feature_index("PreviousGrade"), Some(PREVIOUS_GRADE));
        assert_eq!(
            feature_index("ExtracurricularActivities"),
            Some(EXTRACURRICULAR_ACTIVITIES)
        );
        assert_eq!(feature_index("ParentalSupport"), Some(PARENTAL_SUPPORT));
        assert_eq!(feature_index("Online Classes Taken"), Some(ONLINE_CLASSES_TAKEN));
        assert_eq!(feature_index("OnlineClassesTaken"), None);
    }

    #[test]
    fn test_layout_hash_consistency() {
        assert_eq!(layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(0), Some("Gender"));
        assert_eq!(feature_name(6), Some("Online Classes Taken"));
        assert_eq!(feature_name(7), None);
    }

    #[test]
    fn test_validate_feature_names() {
        let good = LayoutInfo::current().feature_names;
        assert!(validate_feature_names(&good).is_ok());

        let mut swapped = good.clone();
        swapped.swap(1, 2);
        assert!(validate_feature_names(&swapped).is_err());

        assert!(validate_feature_names(&good[..6]).is_err());
    }

    #[test]
    fn test_layout_info() {
        let info = LayoutInfo::current();
        assert_eq!(info.version, FEATURE_VERSION);
        assert_eq!(info.hash, layout_hash());
        assert_eq!(info.feature_names.len(), FEATURE_COUNT);
    }
}
