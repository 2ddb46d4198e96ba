//! Configuration module for Bankrisk.
//!
//! Structured configuration loading from environment variables.

mod predictor_config;

pub use predictor_config::{DEFAULT_MODEL_PATH, PredictorEnvConfig};
