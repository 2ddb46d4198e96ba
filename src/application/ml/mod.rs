pub mod predictor;
pub mod service;
pub mod smartcore_model;
