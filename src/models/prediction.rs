//! Prediction models

use std::fmt;

use serde::{Deserialize, Serialize};

use super::student::StudentRecord;

/// Outcome class of the classifier; class 1 is "High Performance"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceClass {
    #[serde(rename = "High Performance")]
    High,
    #[serde(rename = "Average/Low Performance")]
    AverageLow,
}

impl PerformanceClass {
    /// Map a discrete model label; anything outside {0, 1} is `None`
    pub fn from_label(label: i64) -> Option<Self> {
        match label {
            1 => Some(PerformanceClass::High),
            0 => Some(PerformanceClass::AverageLow),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceClass::High => "High Performance",
            PerformanceClass::AverageLow => "Average/Low Performance",
        }
    }
}

impl fmt::Display for PerformanceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Success body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: PerformanceClass,
    /// Probability of class 1, whichever class was predicted
    pub probability: f64,
    pub student_data: StudentRecord,
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Probability: {:.2})", self.prediction, self.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_label() {
        assert_eq!(PerformanceClass::from_label(1), Some(PerformanceClass::High));
        assert_eq!(PerformanceClass::from_label(0), Some(PerformanceClass::AverageLow));
        assert_eq!(PerformanceClass::from_label(2), None);
        assert_eq!(PerformanceClass::from_label(-1), None);
    }

    #[test]
    fn test_wire_shape() {
        let result = PredictionResult {
            prediction: PerformanceClass::AverageLow,
            probability: 0.25,
            student_data: StudentRecord::try_from(json!({ "Gender": "Male" })).unwrap(),
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "prediction": "Average/Low Performance",
                "probability": 0.25,
                "student_data": { "Gender": "Male" }
            })
        );
    }

    #[test]
    fn test_summary() {
        let result = PredictionResult {
            prediction: PerformanceClass::High,
            probability: 0.8749,
            student_data: StudentRecord::default(),
        };
        assert_eq!(result.to_string(), "High Performance (Probability: 0.87)");
    }
}
