use crate::domain::errors::PredictionError;
use crate::domain::housing::FeatureRecord;

/// Interface for regression models that price a flat
pub trait PriceModel: Send + Sync {
    /// Predict the real (base-period) resale price for one record
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
