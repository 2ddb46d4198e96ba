use crate::domain::errors::PredictionError;
use crate::domain::lending::types::ApplicantRecord;

/// Ordered list of features the caller must supply.
/// This order MUST match exactly the order used when the model was trained,
/// and it is the order missing features are reported in.
/// Any change here is a breaking change for persisted models.
pub const REQUIRED_FEATURES: &[&str] = &[
    "term",
    "int_rate",
    "emp_length",
    "loan_amount",
    "income",
    "expenses",
    "emi",
];

/// Derived feature: debt-to-income ratio as a percentage.
pub const DTI: &str = "dti";

/// Debt-to-income ratio, as a percentage of income.
pub fn debt_to_income(emi: f64, income: f64) -> f64 {
    (emi / income) * 100.0
}

/// Checks that every required feature is present, reporting the missing ones
/// in registry order.
pub fn validate_required(record: &ApplicantRecord) -> Result<(), PredictionError> {
    let missing: Vec<&'static str> = REQUIRED_FEATURES
        .iter()
        .copied()
        .filter(|name| !record.contains(name))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PredictionError::MissingFeatures { missing })
    }
}

/// Builds the single model input row: required features in registry order,
/// followed by `dti` (computed from emi/income when the caller did not
/// supply it).
///
/// Callers must run `validate_required` first; a missing feature here is a
/// programming error and is reported as an inference failure.
pub fn feature_row(record: &ApplicantRecord) -> Result<Vec<f64>, PredictionError> {
    let mut row = Vec::with_capacity(REQUIRED_FEATURES.len() + 1);
    for name in REQUIRED_FEATURES {
        let value = record.get(name).ok_or_else(|| {
            PredictionError::inference_msg(format!("feature '{name}' absent after validation"))
        })?;
        row.push(value);
    }

    let dti = match record.get(DTI) {
        Some(v) => v,
        None => {
            // validate_required guarantees income and emi are present
            let income = record.get("income").unwrap_or(0.0);
            let emi = record.get("emi").unwrap_or(0.0);
            debt_to_income(emi, income)
        }
    };
    row.push(dti);

    Ok(row)
}
