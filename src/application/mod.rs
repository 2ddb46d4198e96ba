// Prediction service and model backends
pub mod ml;
