// Resource loading for a session
pub mod bootstrap;

// Price model backends
pub mod ml;

// Prediction + CPI adjustment
pub mod pricing;
