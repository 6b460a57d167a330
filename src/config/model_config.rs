//! Model artifact configuration parsing from environment variables.
//!
//! The artifact is fetched from a model hub unless `MODEL_PATH` points at a
//! local copy.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_REPO_ID: &str = "jayelleteo/hdb_predict";
pub const DEFAULT_FILENAME: &str = "hdb_price_model.json";
pub const DEFAULT_REVISION: &str = "main";
pub const DEFAULT_HUB_ENDPOINT: &str = "https://huggingface.co";

/// Model environment configuration
#[derive(Debug, Clone)]
pub struct ModelEnvConfig {
    pub repo_id: String,
    pub filename: String,
    pub revision: String,
    pub hub_endpoint: Url,
    pub hub_token: Option<String>,
    pub local_path: Option<PathBuf>,
    pub connect_timeout: Duration,
}

impl ModelEnvConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let endpoint_str =
            lookup("MODEL_HUB_ENDPOINT").unwrap_or_else(|| DEFAULT_HUB_ENDPOINT.to_string());
        let hub_endpoint = Url::parse(&endpoint_str)
            .with_context(|| format!("Invalid MODEL_HUB_ENDPOINT: {}", endpoint_str))?;

        let connect_timeout_secs = match lookup("HTTP_CONNECT_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("Invalid HTTP_CONNECT_TIMEOUT_SECS: {}", v))?,
            None => 10,
        };

        Ok(Self {
            repo_id: lookup("MODEL_REPO_ID").unwrap_or_else(|| DEFAULT_REPO_ID.to_string()),
            filename: lookup("MODEL_FILENAME").unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
            revision: lookup("MODEL_REVISION").unwrap_or_else(|| DEFAULT_REVISION.to_string()),
            hub_endpoint,
            hub_token: lookup("MODEL_HUB_TOKEN").filter(|t| !t.is_empty()),
            local_path: lookup("MODEL_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_config_defaults() {
        let config = ModelEnvConfig::from_lookup(&|_: &str| None).unwrap();

        assert_eq!(config.repo_id, "jayelleteo/hdb_predict");
        assert_eq!(config.filename, "hdb_price_model.json");
        assert_eq!(config.revision, "main");
        assert_eq!(config.hub_endpoint.as_str(), "https://huggingface.co/");
        assert!(config.hub_token.is_none());
        assert!(config.local_path.is_none());
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let lookup = |key: &str| (key == "MODEL_HUB_ENDPOINT").then(|| "not a url".to_string());
        assert!(ModelEnvConfig::from_lookup(&lookup).is_err());
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let lookup = |key: &str| (key == "MODEL_HUB_TOKEN").then(String::new);
        let config = ModelEnvConfig::from_lookup(&lookup).unwrap();
        assert!(config.hub_token.is_none());
    }
}
