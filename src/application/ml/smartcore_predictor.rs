use super::predictor::PriceModel;
use crate::domain::errors::{PredictionError, ResourceError};
use crate::domain::housing::FeatureRecord;
use crate::domain::ml::feature_registry::features_to_f64_vector;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use tracing::info;

pub type ForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Random forest regressor trained with smartcore and published as JSON
pub struct SmartCorePriceModel {
    model: ForestModel,
    version: String,
}

impl SmartCorePriceModel {
    pub fn new(model: ForestModel, version: impl Into<String>) -> Self {
        Self {
            model,
            version: version.into(),
        }
    }

    /// Deserializes a model artifact. `name` is only used for logs and errors.
    pub fn from_json_bytes(name: &str, bytes: &[u8]) -> Result<Self, ResourceError> {
        // Smartcore deserialization (serde_json)
        let model: ForestModel =
            serde_json::from_slice(bytes).map_err(|e| ResourceError::ArtifactDecode {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        info!(
            "Loaded SmartCore model {} ({} bytes)",
            name,
            bytes.len()
        );
        Ok(Self::new(model, name))
    }
}

impl PriceModel for SmartCorePriceModel {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError> {
        let input_vec = features_to_f64_vector(record);
        let input_matrix = DenseMatrix::from_2d_vec(&vec![input_vec])
            .map_err(|e| PredictionError::Encoding(e.to_string()))?;

        let predictions = self
            .model
            .predict(&input_matrix)
            .map_err(|e| PredictionError::Inference {
                backend: self.name().to_string(),
                reason: e.to_string(),
            })?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| PredictionError::EmptyOutput {
                backend: self.name().to_string(),
            })
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        &self.version
    }
}
