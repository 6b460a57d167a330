use super::predictor::PriceModel;
use super::smartcore_predictor::SmartCorePriceModel;
use crate::domain::errors::ResourceError;
use crate::domain::ports::{ArtifactSource, ModelArtifact};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Serialized model formats understood by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    SmartCoreJson,
    Onnx,
}

impl ModelFormat {
    /// Picks the format from the artifact's file extension
    pub fn from_file_name(name: &str) -> Result<Self, ResourceError> {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(ModelFormat::SmartCoreJson),
            Some("onnx") => Ok(ModelFormat::Onnx),
            _ => Err(ResourceError::UnsupportedFormat {
                name: name.to_string(),
            }),
        }
    }
}

/// Turns a fetched artifact into a ready price model
pub fn model_from_artifact(artifact: &ModelArtifact) -> Result<Arc<dyn PriceModel>, ResourceError> {
    match ModelFormat::from_file_name(&artifact.name)? {
        ModelFormat::SmartCoreJson => Ok(Arc::new(SmartCorePriceModel::from_json_bytes(
            &artifact.name,
            &artifact.bytes,
        )?)),
        #[cfg(feature = "onnx")]
        ModelFormat::Onnx => Ok(Arc::new(super::onnx_predictor::OnnxPriceModel::from_bytes(
            &artifact.name,
            &artifact.bytes,
        )?)),
        #[cfg(not(feature = "onnx"))]
        ModelFormat::Onnx => Err(ResourceError::UnsupportedFormat {
            name: format!("{} (built without the `onnx` feature)", artifact.name),
        }),
    }
}

/// Fetches the artifact once and deserializes it.
pub async fn load_model(source: &dyn ArtifactSource) -> Result<Arc<dyn PriceModel>, ResourceError> {
    info!("Fetching model artifact from {}", source.describe());
    let artifact = source.fetch().await?;
    let model = model_from_artifact(&artifact)?;
    info!("Price model ready: {} {}", model.name(), model.version());
    Ok(model)
}
