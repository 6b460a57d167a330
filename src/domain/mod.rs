// Flat attributes, feature records and prediction results
pub mod housing;

// Model input encoding
pub mod ml;

// CPI table and inflation adjustment
pub mod pricing;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
