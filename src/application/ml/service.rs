use super::predictor::ApprovalModel;
use crate::domain::errors::PredictionError;
use crate::domain::lending::types::{
    ApplicantRecord, ApprovalResult, ApprovalStatus, EligibilityResult, TermResult,
};
use crate::domain::ml::feature_registry;
use std::sync::Arc;
use tracing::debug;

/// Loan prediction service: wraps the shared approval model and exposes the
/// three prediction operations.
///
/// The model is injected by the composition root and shared read-only, so
/// the service itself is stateless and freely cloneable across handlers.
#[derive(Clone)]
pub struct LoanPredictor {
    model: Arc<dyn ApprovalModel>,
}

impl LoanPredictor {
    pub fn new(model: Arc<dyn ApprovalModel>) -> Self {
        Self { model }
    }

    /// Predict loan approval (0 or 1) and its probability.
    ///
    /// All registered features must be present; the error names exactly the
    /// missing ones. The `dti` column is derived from emi/income when the
    /// caller did not supply it.
    pub fn predict_approval(
        &self,
        record: &ApplicantRecord,
    ) -> Result<ApprovalResult, PredictionError> {
        feature_registry::validate_required(record)?;
        let row = feature_registry::feature_row(record)?;

        let score = self.model.predict_score(&row)?;
        let probability = score.clamp(0.0, 1.0);
        let prediction = if probability >= 0.5 { 1 } else { 0 };

        debug!(
            model = self.model.name(),
            score, prediction, "approval inference complete"
        );

        Ok(ApprovalResult {
            prediction,
            probability: round_to(probability, 4),
            status: ApprovalStatus::from_prediction(prediction),
        })
    }

    /// Echoes the requested loan term as an integer.
    ///
    /// This is a passthrough of the input, not a model prediction, which is
    /// why it is not named `predict_*`.
    pub fn loan_term(&self, record: &ApplicantRecord) -> Result<TermResult, PredictionError> {
        let term = record
            .get("term")
            .ok_or(PredictionError::MissingInput { name: "term" })?;
        Ok(TermResult {
            loan_term: term as i64,
        })
    }

    /// Determine loan eligibility from the debt-to-income ratio.
    /// Rule: eligible iff EMI is under 50% of income.
    pub fn predict_eligibility(
        &self,
        record: &ApplicantRecord,
    ) -> Result<EligibilityResult, PredictionError> {
        let income = record
            .get("income")
            .ok_or(PredictionError::MissingInput { name: "income" })?;
        let emi = record
            .get("emi")
            .ok_or(PredictionError::MissingInput { name: "emi" })?;
        if income == 0.0 {
            return Err(PredictionError::inference_msg(
                "income must be non-zero to compute debt-to-income ratio",
            ));
        }

        let dti = feature_registry::debt_to_income(emi, income);
        let eligible = dti < 50.0;
        let message = if eligible {
            "Your debt-to-income ratio is acceptable."
        } else {
            "Your debt-to-income ratio is too high."
        };

        Ok(EligibilityResult {
            eligible,
            dti: round_to(dti, 2),
            message: message.to_string(),
        })
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
