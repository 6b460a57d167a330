use serde::Serialize;

/// Prices derived for one feature record. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Model output in constant (base-period) dollars
    pub real_price: f64,
    /// Real price rescaled by the forecasted CPI for the purchase year
    pub nominal_price: f64,
    pub cpi_used: f64,
}
