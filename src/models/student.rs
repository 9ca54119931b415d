//! Student record model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untrusted prediction input, kept exactly as the client sent it.
///
/// Field access goes through the encoder; the raw map is echoed back in
/// the success response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentRecord(Map<String, Value>);

/// The request body was valid JSON but not an object
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Request body must be a JSON object, got {found}")]
pub struct NotAnObject {
    pub found: &'static str,
}

impl StudentRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw value for `name`; an explicit `null` counts as absent
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Value> for StudentRecord {
    type Error = NotAnObject;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Err(NotAnObject { found: "null" }),
            Value::Bool(_) => Err(NotAnObject { found: "a boolean" }),
            Value::Number(_) => Err(NotAnObject { found: "a number" }),
            Value::String(_) => Err(NotAnObject { found: "a string" }),
            Value::Array(_) => Err(NotAnObject { found: "an array" }),
        }
    }
}

impl From<StudentRecord> for Value {
    fn from(record: StudentRecord) -> Self {
        Value::Object(record.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_field_is_absent() {
        let record = StudentRecord::try_from(json!({ "Gender": null, "PreviousGrade": 90 })).unwrap();
        assert!(record.field("Gender").is_none());
        assert_eq!(record.field("PreviousGrade"), Some(&json!(90)));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_non_object_rejected() {
        let err = StudentRecord::try_from(json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.found, "an array");
        assert!(StudentRecord::try_from(json!("Female")).is_err());
    }

    #[test]
    fn test_echo_preserves_key_order() {
        let raw = json!({ "ParentalSupport": "Low", "Gender": "Male", "Extra": [1] });
        let record = StudentRecord::try_from(raw.clone()).unwrap();
        let echoed = serde_json::to_string(&record).unwrap();
        assert_eq!(echoed, serde_json::to_string(&raw).unwrap());
        assert!(echoed.starts_with("{\"ParentalSupport\""));
    }
}
