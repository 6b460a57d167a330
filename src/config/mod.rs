//! Configuration module for the HDB forecast dashboard.
//!
//! Configuration is loaded from environment variables (after `.env` has been
//! read by the binary), organized by concern: the model artifact and the
//! bundled assets.

mod asset_config;
mod model_config;

pub use asset_config::AssetEnvConfig;
pub use model_config::ModelEnvConfig;

use anyhow::{Context, Result};
use std::env;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelEnvConfig,
    pub assets: AssetEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let model = ModelEnvConfig::from_lookup(lookup).context("Failed to load model config")?;
        let assets = AssetEnvConfig::from_lookup(lookup);

        Ok(Self { model, assets })
    }
}
