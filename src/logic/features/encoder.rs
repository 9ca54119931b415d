//! Feature Encoder - StudentRecord → FeatureVector
//!
//! Validates the untrusted record field by field, in layout order, and
//! reports the first offending field. Numeric fields carry no range checks:
//! an AttendanceRate of 140 encodes as 140.0.

use serde_json::Value;

use super::categorical::{online_classes_code, Gender, OnlineClassesValue, ParentalSupport};
use super::layout::{
    ATTENDANCE_RATE, EXTRACURRICULAR_ACTIVITIES, FEATURE_COUNT, FEATURE_LAYOUT, GENDER,
    ONLINE_CLASSES_TAKEN, PARENTAL_SUPPORT, PREVIOUS_GRADE, STUDY_HOURS_PER_WEEK,
};
use super::vector::FeatureVector;
use crate::models::StudentRecord;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodingError {
    /// Categorical value not present in its lookup table
    #[error("Invalid categorical value for field '{field}': {value}")]
    InvalidCategoricalValue { field: &'static str, value: String },

    /// Required key absent, or a numeric field that cannot be coerced
    #[error("Missing or malformed field '{field}': {detail}")]
    MissingOrMalformedField { field: &'static str, detail: String },
}

impl EncodingError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            EncodingError::InvalidCategoricalValue { field, .. } => field,
            EncodingError::MissingOrMalformedField { field, .. } => field,
        }
    }

    fn missing(field: &'static str) -> Self {
        EncodingError::MissingOrMalformedField {
            field,
            detail: "field is required".to_string(),
        }
    }

    fn malformed(field: &'static str, expected: &str, found: &Value) -> Self {
        EncodingError::MissingOrMalformedField {
            field,
            detail: format!("expected {}, got {}", expected, found),
        }
    }

    fn invalid_category(field: &'static str, found: &Value) -> Self {
        EncodingError::InvalidCategoricalValue {
            field,
            value: found.to_string(),
        }
    }
}

// ============================================================================
// DECODED RECORD
// ============================================================================

/// Typed view of a validated record, before flattening to floats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentFeatures {
    pub gender: Gender,
    pub attendance_rate: f64,
    pub study_hours_per_week: f64,
    pub previous_grade: f64,
    pub extracurricular_activities: i64,
    pub parental_support: ParentalSupport,
    pub online_classes_taken: bool,
}

impl StudentFeatures {
    pub fn to_vector(&self) -> FeatureVector {
        let mut values = [0.0f64; FEATURE_COUNT];
        values[GENDER] = f64::from(self.gender.code());
        values[ATTENDANCE_RATE] = self.attendance_rate;
        values[STUDY_HOURS_PER_WEEK] = self.study_hours_per_week;
        values[PREVIOUS_GRADE] = self.previous_grade;
        values[EXTRACURRICULAR_ACTIVITIES] = self.extracurricular_activities as f64;
        values[PARENTAL_SUPPORT] = f64::from(self.parental_support.code());
        values[ONLINE_CLASSES_TAKEN] = f64::from(online_classes_code(self.online_classes_taken));
        FeatureVector::from_values(values)
    }
}

// ============================================================================
// ENCODING
// ============================================================================

/// Validate and type every field of the record
pub fn decode(record: &StudentRecord) -> Result<StudentFeatures, EncodingError> {
    Ok(StudentFeatures {
        gender: decode_gender(record)?,
        attendance_rate: require_float(record, FEATURE_LAYOUT[ATTENDANCE_RATE])?,
        study_hours_per_week: require_float(record, FEATURE_LAYOUT[STUDY_HOURS_PER_WEEK])?,
        previous_grade: require_float(record, FEATURE_LAYOUT[PREVIOUS_GRADE])?,
        extracurricular_activities: require_int(
            record,
            FEATURE_LAYOUT[EXTRACURRICULAR_ACTIVITIES],
        )?,
        parental_support: decode_parental_support(record)?,
        online_classes_taken: decode_online_classes(record)?,
    })
}

/// Encode a record into the model's input vector
pub fn encode(record: &StudentRecord) -> Result<FeatureVector, EncodingError> {
    decode(record).map(|features| features.to_vector())
}

fn require<'a>(record: &'a StudentRecord, field: &'static str) -> Result<&'a Value, EncodingError> {
    record.field(field).ok_or_else(|| EncodingError::missing(field))
}

fn decode_gender(record: &StudentRecord) -> Result<Gender, EncodingError> {
    let field = FEATURE_LAYOUT[GENDER];
    let raw = require(record, field)?;
    raw.as_str()
        .and_then(Gender::from_label)
        .ok_or_else(|| EncodingError::invalid_category(field, raw))
}

fn decode_parental_support(record: &StudentRecord) -> Result<ParentalSupport, EncodingError> {
    let field = FEATURE_LAYOUT[PARENTAL_SUPPORT];
    let raw = require(record, field)?;
    raw.as_str()
        .and_then(ParentalSupport::from_label)
        .ok_or_else(|| EncodingError::invalid_category(field, raw))
}

fn decode_online_classes(record: &StudentRecord) -> Result<bool, EncodingError> {
    let field = FEATURE_LAYOUT[ONLINE_CLASSES_TAKEN];
    let raw = require(record, field)?;
    OnlineClassesValue::from_json(raw)
        .and_then(|v| v.normalize())
        .ok_or_else(|| EncodingError::invalid_category(field, raw))
}

fn require_float(record: &StudentRecord, field: &'static str) -> Result<f64, EncodingError> {
    let raw = require(record, field)?;
    coerce_float(raw).ok_or_else(|| EncodingError::malformed(field, "a number", raw))
}

fn require_int(record: &StudentRecord, field: &'static str) -> Result<i64, EncodingError> {
    let raw = require(record, field)?;
    coerce_int(raw).ok_or_else(|| EncodingError::malformed(field, "an integer", raw))
}

// ============================================================================
// COERCION
// ============================================================================

/// Numbers, numeric strings and booleans; NaN and infinities are rejected
pub fn coerce_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// Integers, finite floats (truncated toward zero), integer strings and booleans
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            if n.is_u64() {
                return None;
            }
            n.as_f64().and_then(truncate_float)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn truncate_float(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let truncated = f.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}
