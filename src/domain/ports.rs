use crate::domain::errors::ResourceError;
use async_trait::async_trait;

/// A model artifact as fetched from its store, before deserialization
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    /// File name the backend is chosen from, e.g. `hdb_price_model.json`
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Somewhere a model artifact can be fetched from
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    async fn fetch(&self) -> Result<ModelArtifact, ResourceError>;

    /// Human-readable origin for logs and error screens
    fn describe(&self) -> String;
}
