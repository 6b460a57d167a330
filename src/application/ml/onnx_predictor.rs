use super::predictor::PriceModel;
use crate::domain::errors::{PredictionError, ResourceError};
use crate::domain::housing::FeatureRecord;
use crate::domain::ml::feature_registry::{FEATURE_NAMES, features_to_vector};
use ort::session::Session;
use std::sync::Mutex;
use tracing::info;

/// Regression graph exported to ONNX, fed one `[1, N]` f32 row
pub struct OnnxPriceModel {
    session: Mutex<Session>,
    version: String,
}

impl OnnxPriceModel {
    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Self, ResourceError> {
        let decode_error = |e: ort::Error| ResourceError::ArtifactDecode {
            name: name.to_string(),
            reason: e.to_string(),
        };

        let session = Session::builder()
            .map_err(decode_error)?
            .commit_from_memory(bytes)
            .map_err(decode_error)?;

        info!("Loaded ONNX model {} ({} bytes)", name, bytes.len());
        Ok(Self {
            session: Mutex::new(session),
            version: name.to_string(),
        })
    }

    fn inference_error(&self, reason: impl ToString) -> PredictionError {
        PredictionError::Inference {
            backend: self.name().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl PriceModel for OnnxPriceModel {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError> {
        let input = features_to_vector(record);
        let shape = vec![1, FEATURE_NAMES.len()];

        let input_value = ort::value::Value::from_array((shape.as_slice(), input))
            .map_err(|e| PredictionError::Encoding(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| self.inference_error(format!("Mutex lock failed: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_value])
            .map_err(|e| self.inference_error(e))?;

        let (_, output_value) = outputs
            .iter()
            .next()
            .ok_or_else(|| PredictionError::EmptyOutput {
                backend: self.name().to_string(),
            })?;
        let data = output_value
            .try_extract_tensor::<f32>()
            .map_err(|e| self.inference_error(e))?;

        data.1
            .iter()
            .next()
            .map(|v| *v as f64)
            .ok_or_else(|| PredictionError::EmptyOutput {
                backend: self.name().to_string(),
            })
    }

    fn name(&self) -> &str {
        "ONNX Runtime"
    }

    fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_graph() {
        let err = OnnxPriceModel::from_bytes("garbage.onnx", b"not a protobuf graph").err();
        assert!(matches!(err, Some(ResourceError::ArtifactDecode { .. })));
    }
}
