use crate::domain::errors::ResourceError;
use crate::domain::ports::{ArtifactSource, ModelArtifact};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Model artifact already present on disk, bypassing the hub
pub struct LocalArtifactSource {
    path: PathBuf,
}

impl LocalArtifactSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArtifactSource for LocalArtifactSource {
    async fn fetch(&self) -> Result<ModelArtifact, ResourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ResourceError::ArtifactFetch {
                location: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());

        info!("Read model artifact {:?} ({} bytes)", self.path, bytes.len());
        Ok(ModelArtifact { name, bytes })
    }

    fn describe(&self) -> String {
        format!("local file {}", self.path.display())
    }
}
