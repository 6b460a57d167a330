use crate::application::ml::PriceModel;
use crate::domain::errors::PredictionError;
use crate::domain::housing::{FeatureRecord, PredictionResult};
use crate::domain::pricing::{CpiTable, adjust_for_inflation};
use std::sync::Arc;
use tracing::debug;

/// Prices a feature record: model prediction, CPI lookup, inflation adjustment.
///
/// Holds the session's loaded resources; cloning shares them.
#[derive(Clone)]
pub struct PricingService {
    model: Arc<dyn PriceModel>,
    cpi_table: Arc<CpiTable>,
}

impl PricingService {
    pub fn new(model: Arc<dyn PriceModel>, cpi_table: Arc<CpiTable>) -> Self {
        Self { model, cpi_table }
    }

    pub fn quote(&self, record: &FeatureRecord) -> Result<PredictionResult, PredictionError> {
        let real_price = self.model.predict(record)?;
        let cpi_used = self.cpi_table.lookup(record.year() as i32);
        let nominal_price = adjust_for_inflation(real_price, cpi_used);

        debug!(
            "Quoted {:?}: real={:.0} cpi={:.2} nominal={:.0}",
            record, real_price, cpi_used, nominal_price
        );

        Ok(PredictionResult {
            real_price,
            nominal_price,
            cpi_used,
        })
    }

    pub fn cpi_table(&self) -> &CpiTable {
        &self.cpi_table
    }

    pub fn model(&self) -> &dyn PriceModel {
        self.model.as_ref()
    }
}
