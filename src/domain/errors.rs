use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to callers of the prediction operations
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Missing features: [{}]", .missing.join(", "))]
    MissingFeatures { missing: Vec<&'static str> },

    #[error("Missing '{name}' input")]
    MissingInput { name: &'static str },

    #[error("Feature '{name}' is not a finite number")]
    NonNumeric { name: String },

    #[error("Failed to make prediction: {reason}")]
    Inference {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PredictionError {
    /// Wraps an underlying model failure, keeping the cause for diagnostics.
    pub fn inference<E>(reason: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        PredictionError::Inference {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn inference_msg(reason: impl Into<String>) -> Self {
        PredictionError::Inference {
            reason: reason.into(),
            source: None,
        }
    }
}

/// Errors related to loading the model artifact.
///
/// All of these are fatal: the predictor cannot be constructed without a
/// usable artifact, and there is no fallback model.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Model file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read model file {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize model from {path:?}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
