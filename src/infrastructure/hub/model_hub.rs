use crate::domain::errors::ResourceError;
use crate::domain::ports::{ArtifactSource, ModelArtifact};
use async_trait::async_trait;
use reqwest::Client;
use tracing::info;
use url::Url;

/// Model artifact published on a Hugging Face style hub, addressed by
/// repository id, revision and file name.
pub struct HubArtifactSource {
    client: Client,
    endpoint: Url,
    repo_id: String,
    filename: String,
    revision: String,
    token: Option<String>,
}

impl HubArtifactSource {
    pub fn new(
        client: Client,
        endpoint: Url,
        repo_id: impl Into<String>,
        filename: impl Into<String>,
        revision: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint,
            repo_id: repo_id.into(),
            filename: filename.into(),
            revision: revision.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// `{endpoint}/{repo_id}/resolve/{revision}/{filename}`
    pub fn download_url(&self) -> Result<Url, ResourceError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| ResourceError::ArtifactFetch {
                location: self.endpoint.to_string(),
                reason: "endpoint cannot be used as a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(self.repo_id.split('/'))
            .push("resolve")
            .push(&self.revision)
            .extend(self.filename.split('/'));
        Ok(url)
    }

    fn artifact_name(&self) -> String {
        self.filename
            .rsplit('/')
            .next()
            .unwrap_or(&self.filename)
            .to_string()
    }
}

#[async_trait]
impl ArtifactSource for HubArtifactSource {
    async fn fetch(&self) -> Result<ModelArtifact, ResourceError> {
        let url = self.download_url()?;
        let fetch_error = |reason: String| ResourceError::ArtifactFetch {
            location: url.to_string(),
            reason,
        };

        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        info!("Downloaded {} ({} bytes)", url, bytes.len());
        Ok(ModelArtifact {
            name: self.artifact_name(),
            bytes: bytes.to_vec(),
        })
    }

    fn describe(&self) -> String {
        format!(
            "hub repo {} ({} @ {})",
            self.repo_id, self.filename, self.revision
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(endpoint: &str) -> HubArtifactSource {
        HubArtifactSource::new(
            Client::new(),
            Url::parse(endpoint).unwrap(),
            "jayelleteo/hdb_predict",
            "hdb_price_model.json",
            "main",
        )
    }

    #[test]
    fn test_download_url_layout() {
        let url = source("https://huggingface.co").download_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://huggingface.co/jayelleteo/hdb_predict/resolve/main/hdb_price_model.json"
        );
    }

    #[test]
    fn test_download_url_keeps_endpoint_prefix() {
        let url = source("https://mirror.example.com/hub/").download_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://mirror.example.com/hub/jayelleteo/hdb_predict/resolve/main/hdb_price_model.json"
        );
    }

    #[test]
    fn test_artifact_name_strips_directories() {
        let source = HubArtifactSource::new(
            Client::new(),
            Url::parse("https://huggingface.co").unwrap(),
            "org/repo",
            "models/v2/forest.json",
            "main",
        );
        assert_eq!(source.artifact_name(), "forest.json");
    }
}
