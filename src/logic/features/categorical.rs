//! Categorical encoding tables
//!
//! Codes are the ones the label encoder assigned during training, i.e. the
//! alphabetical rank of each label string. `ParentalSupport` is therefore
//! High=0, Low=1, Medium=2 and not a severity scale. Changing any code here
//! desynchronizes the server from every trained model.

use serde_json::Value;

// ============================================================================
// GENDER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    /// Exact, case-sensitive lookup
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Female" => Some(Gender::Female),
            "Male" => Some(Gender::Male),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }
}

// ============================================================================
// PARENTAL SUPPORT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentalSupport {
    High,
    Low,
    Medium,
}

impl ParentalSupport {
    pub const ALL: [ParentalSupport; 3] = [
        ParentalSupport::High,
        ParentalSupport::Low,
        ParentalSupport::Medium,
    ];

    /// Exact, case-sensitive lookup
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "High" => Some(ParentalSupport::High),
            "Low" => Some(ParentalSupport::Low),
            "Medium" => Some(ParentalSupport::Medium),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParentalSupport::High => "High",
            ParentalSupport::Low => "Low",
            ParentalSupport::Medium => "Medium",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ParentalSupport::High => 0,
            ParentalSupport::Low => 1,
            ParentalSupport::Medium => 2,
        }
    }
}

// ============================================================================
// ONLINE CLASSES TAKEN
// ============================================================================

/// Raw "Online Classes Taken" value as it arrives on the wire.
///
/// Clients send either a JSON boolean or the literal strings `"True"` /
/// `"False"`. Both shapes are normalized to one boolean before lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnlineClassesValue {
    Boolean(bool),
    Literal(String),
}

impl OnlineClassesValue {
    /// Classify a raw JSON value; anything but a bool or a string is `None`
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(OnlineClassesValue::Boolean(*b)),
            Value::String(s) => Some(OnlineClassesValue::Literal(s.clone())),
            _ => None,
        }
    }

    /// `"true"`, `"1"` and other spellings are rejected
    pub fn normalize(&self) -> Option<bool> {
        match self {
            OnlineClassesValue::Boolean(b) => Some(*b),
            OnlineClassesValue::Literal(s) => match s.as_str() {
                "True" => Some(true),
                "False" => Some(false),
                _ => None,
            },
        }
    }
}

pub fn online_classes_code(taken: bool) -> u8 {
    u8::from(taken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gender_table() {
        assert_eq!(Gender::from_label("Female").map(Gender::code), Some(0));
        assert_eq!(Gender::from_label("Male").map(Gender::code), Some(1));
        assert_eq!(Gender::from_label("female"), None);
        assert_eq!(Gender::from_label("MALE"), None);
        assert_eq!(Gender::from_label(" Male"), None);
    }

    #[test]
    fn test_parental_support_is_alphabetical() {
        let codes: Vec<u8> = ParentalSupport::ALL.iter().map(|p| p.code()).collect();
        assert_eq!(codes, vec![0, 1, 2]);

        let labels: Vec<&str> = ParentalSupport::ALL.iter().map(|p| p.label()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);

        assert_eq!(ParentalSupport::from_label("Medium").map(ParentalSupport::code), Some(2));
        assert_eq!(ParentalSupport::from_label("medium"), None);
    }

    #[test]
    fn test_labels_round_trip_through_lookup() {
        for g in Gender::ALL {
            assert_eq!(Gender::from_label(g.label()), Some(g));
        }
        for p in ParentalSupport::ALL {
            assert_eq!(ParentalSupport::from_label(p.label()), Some(p));
        }
    }

    #[test]
    fn test_online_classes_shapes() {
        let cases = [
            (json!(true), Some(true)),
            (json!(false), Some(false)),
            (json!("True"), Some(true)),
            (json!("False"), Some(false)),
            (json!("true"), None),
            (json!("FALSE"), None),
            (json!("1"), None),
        ];

        for (raw, expected) in cases {
            let parsed = OnlineClassesValue::from_json(&raw).and_then(|v| v.normalize());
            assert_eq!(parsed, expected, "raw value {raw}");
        }
    }

    #[test]
    fn test_online_classes_rejects_non_bool_non_string() {
        assert_eq!(OnlineClassesValue::from_json(&json!(1)), None);
        assert_eq!(OnlineClassesValue::from_json(&json!(null)), None);
        assert_eq!(OnlineClassesValue::from_json(&json!(["True"])), None);
    }

    #[test]
    fn test_online_classes_code() {
        assert_eq!(online_classes_code(true), 1);
        assert_eq!(online_classes_code(false), 0);
    }
}
