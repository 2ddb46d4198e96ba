use super::predictor::ApprovalModel;
use crate::domain::errors::{ArtifactError, PredictionError};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;

/// Random forest approval model persisted as serde_json.
///
/// The forest is trained on 0/1 repay labels, so its regression output is
/// the fraction of trees voting "repay" and already behaves as a
/// probability. The artifact is loaded once, eagerly; a missing or corrupt
/// file aborts construction, there is no fallback model.
pub struct SmartCoreApprovalModel {
    model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl SmartCoreApprovalModel {
    pub fn load(model_path: PathBuf) -> Result<Self, ArtifactError> {
        if !model_path.exists() {
            return Err(ArtifactError::NotFound { path: model_path });
        }

        let file = File::open(&model_path).map_err(|source| ArtifactError::Unreadable {
            path: model_path.clone(),
            source,
        })?;

        let model =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                ArtifactError::Corrupt {
                    path: model_path.clone(),
                    source,
                }
            })?;

        info!("Loaded approval model from {:?}", model_path);
        Ok(Self { model })
    }
}

impl ApprovalModel for SmartCoreApprovalModel {
    fn predict_score(&self, features: &[f64]) -> Result<f64, PredictionError> {
        let matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()])
            .map_err(|e| PredictionError::inference_msg(format!("Matrix creation failed: {e}")))?;

        let predictions = self
            .model
            .predict(&matrix)
            .map_err(|e| PredictionError::inference_msg(format!("Prediction failed: {e}")))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| PredictionError::inference_msg("No prediction returned"))
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_artifact_is_fatal() {
        let err = SmartCoreApprovalModel::load(PathBuf::from("/nonexistent/model.json"))
            .err()
            .expect("load must fail");
        assert!(matches!(err, ArtifactError::NotFound { .. }));
        assert!(err.to_string().contains("Model file not found"));
    }

    #[test]
    fn test_load_corrupt_artifact_is_fatal() {
        let path = std::env::temp_dir().join("bankrisk_corrupt_model.json");
        std::fs::write(&path, b"not a model").unwrap();

        let err = SmartCoreApprovalModel::load(path.clone())
            .err()
            .expect("load must fail");
        assert!(matches!(err, ArtifactError::Corrupt { .. }));

        let _ = std::fs::remove_file(path);
    }
}
