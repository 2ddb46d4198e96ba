use crate::domain::lending::types::ApplicantRecord;
use tracing::warn;

/// Boundary validator for applicant values.
///
/// Rejects values that are physically nonsensical (zero income, negative
/// rate). The predictor itself only checks key presence; these checks belong
/// to the request boundary.
pub struct ApplicantSanityCheck;

impl ApplicantSanityCheck {
    /// Validates an applicant record. Returns true if sane, false otherwise.
    pub fn validate(record: &ApplicantRecord) -> bool {
        if record.get("term").is_some_and(|term| term <= 0.0) {
            warn!("Validation FAILED: loan term must be positive");
            return false;
        }
        if record.get("int_rate").is_some_and(|rate| rate < 0.0) {
            warn!("Validation FAILED: interest rate cannot be negative");
            return false;
        }
        if record.get("loan_amount").is_some_and(|amount| amount <= 0.0) {
            warn!("Validation FAILED: loan amount must be positive");
            return false;
        }
        if record.get("income").is_some_and(|income| income <= 0.0) {
            warn!("Validation FAILED: income must be positive");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sane_record_passes() {
        let record = ApplicantRecord::from_json(&json!({
            "term": 36, "int_rate": 10.5, "loan_amount": 15000, "income": 55000,
        }))
        .unwrap();
        assert!(ApplicantSanityCheck::validate(&record));
    }

    #[test]
    fn test_zero_income_rejected() {
        let record = ApplicantRecord::from_json(&json!({"term": 36, "income": 0})).unwrap();
        assert!(!ApplicantSanityCheck::validate(&record));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let record = ApplicantRecord::from_json(&json!({"int_rate": -1.0})).unwrap();
        assert!(!ApplicantSanityCheck::validate(&record));
    }

    #[test]
    fn test_partial_record_only_checks_present_fields() {
        // Key presence is the predictor's job, not the sanity check's
        let record = ApplicantRecord::from_json(&json!({"emi": 456})).unwrap();
        assert!(ApplicantSanityCheck::validate(&record));
    }
}
