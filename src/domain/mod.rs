// Loan application records and prediction results
pub mod lending;

// Feature ordering contract shared with the training side
pub mod ml;

// Boundary value checks
pub mod validation;

// Domain-specific error types
pub mod errors;
