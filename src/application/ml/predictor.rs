use crate::domain::errors::PredictionError;

/// Interface for approval-scoring models
pub trait ApprovalModel: Send + Sync {
    /// Score a single feature row. Returns the probability of repayment
    /// (0.0 to 1.0); >= 0.5 implies approval.
    fn predict_score(&self, features: &[f64]) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
