use crate::domain::housing::{FeatureRecord, PredictionResult};
use crate::interfaces::format::{format_cpi, format_sgd, title_case};

/// Display-ready strings for one prediction
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    /// (label, value) for each submitted feature, in form order
    pub inputs: Vec<(&'static str, String)>,
    pub real_price: String,
    pub nominal_price: String,
    pub cpi: String,
}

impl PredictionView {
    pub fn real_price_line(&self) -> String {
        format!("Predicted Real Price (Inflation-adjusted): {}", self.real_price)
    }

    pub fn nominal_price_line(&self) -> String {
        format!(
            "Predicted Nominal Price: {} (using forecasted CPI: {})",
            self.nominal_price, self.cpi
        )
    }
}

pub struct PredictionViewModel;

impl PredictionViewModel {
    pub fn build(record: &FeatureRecord, result: &PredictionResult) -> PredictionView {
        PredictionView {
            inputs: vec![
                ("Year", record.year().to_string()),
                ("Lease Years Left", record.lease_years_left().to_string()),
                ("Flat Type", title_case(record.flat_type().label())),
                ("Town", title_case(record.town().label())),
                ("Storey Range", record.storey_range().label()),
            ],
            real_price: format_sgd(result.real_price),
            nominal_price: format_sgd(result.nominal_price),
            cpi: format_cpi(result.cpi_used),
        }
    }
}
