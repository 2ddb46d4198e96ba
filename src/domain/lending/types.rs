use crate::domain::errors::PredictionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A validated flat record of applicant features.
///
/// Values are finite f64 by construction; request handlers deliver form data
/// as JSON, so the boundary accepts numbers and numeric strings (e.g. "24")
/// and rejects everything else. Unknown keys are kept but only the registered
/// features ever reach the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantRecord {
    values: BTreeMap<String, f64>,
}

impl ApplicantRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a JSON object, coercing numeric strings.
    pub fn from_json(input: &serde_json::Value) -> Result<Self, PredictionError> {
        let obj = input
            .as_object()
            .ok_or_else(|| PredictionError::NonNumeric {
                name: "<input>".to_string(),
            })?;

        let mut record = Self::new();
        for (key, value) in obj {
            let num = coerce_numeric(value).ok_or_else(|| PredictionError::NonNumeric {
                name: key.clone(),
            })?;
            record.values.insert(key.clone(), num);
        }
        Ok(record)
    }

    /// Inserts a feature value. Non-finite values are rejected.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Result<(), PredictionError> {
        let name = name.into();
        if !value.is_finite() {
            return Err(PredictionError::NonNumeric { name });
        }
        self.values.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Accepts JSON numbers and strings that parse to a finite number.
fn coerce_numeric(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn from_prediction(prediction: u8) -> Self {
        if prediction == 1 {
            ApprovalStatus::Approved
        } else {
            ApprovalStatus::Rejected
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalStatus::Approved => write!(f, "approved"),
            ApprovalStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Outcome of the approval classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalResult {
    /// 0 = will not repay, 1 = will repay
    pub prediction: u8,
    /// Probability of the positive class, rounded to 4 decimals
    pub probability: f64,
    pub status: ApprovalStatus,
}

/// Echo of the requested loan term. Not model-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermResult {
    pub loan_term: i64,
}

/// Rule-based eligibility decision on the debt-to-income ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    /// DTI as a percentage, rounded to 2 decimals
    pub dti: f64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_accepts_numbers_and_numeric_strings() {
        let record = ApplicantRecord::from_json(&json!({
            "term": 36,
            "int_rate": "13.56",
            "income": 55000.0,
        }))
        .unwrap();

        assert_eq!(record.get("term"), Some(36.0));
        assert_eq!(record.get("int_rate"), Some(13.56));
        assert_eq!(record.get("income"), Some(55000.0));
    }

    #[test]
    fn test_from_json_rejects_non_numeric_value() {
        let err = ApplicantRecord::from_json(&json!({"term": 36, "purpose": "credit_card"}))
            .unwrap_err();
        assert!(err.to_string().contains("purpose"));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(ApplicantRecord::from_json(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_set_rejects_non_finite() {
        let mut record = ApplicantRecord::new();
        assert!(record.set("income", f64::NAN).is_err());
        assert!(record.set("income", 55000.0).is_ok());
    }

    #[test]
    fn test_status_matches_prediction() {
        assert_eq!(
            ApprovalStatus::from_prediction(1),
            ApprovalStatus::Approved
        );
        assert_eq!(
            ApprovalStatus::from_prediction(0),
            ApprovalStatus::Rejected
        );
    }

    #[test]
    fn test_approval_result_serializes_lowercase_status() {
        let result = ApprovalResult {
            prediction: 1,
            probability: 0.8731,
            status: ApprovalStatus::Approved,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "approved");
        assert_eq!(value["prediction"], 1);
    }
}
