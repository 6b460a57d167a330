//! Session bootstrap: loads every resource the dashboard needs, once.

use anyhow::{Context, Result};
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::ml::load_model;
use crate::application::pricing::PricingService;
use crate::config::Config;
use crate::domain::ports::ArtifactSource;
use crate::infrastructure::HttpClientFactory;
use crate::infrastructure::assets::{EmbeddedImage, fetch_image, read_image_file};
use crate::infrastructure::hub::{HubArtifactSource, LocalArtifactSource};
use crate::infrastructure::persistence::load_cpi_table;

/// Resources owned by one session
#[derive(Clone)]
pub struct AppContext {
    pub pricing: PricingService,
    pub banner_image: Option<EmbeddedImage>,
    pub profile_image: Option<EmbeddedImage>,
    pub model_origin: String,
}

pub struct AppBootstrap;

impl AppBootstrap {
    /// Loads the CPI table and the model (fatal on failure), then the
    /// images (skipped with a warning on failure).
    pub async fn init(config: &Config) -> Result<AppContext> {
        let client = HttpClientFactory::create_client(config.model.connect_timeout);
        let source = Self::artifact_source(config, client.clone());
        let pricing = Self::load_pricing(config, source.as_ref()).await?;

        let banner_image = match read_image_file(&config.assets.banner_image_path) {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Banner image unavailable: {:#}", e);
                None
            }
        };
        let profile_image = Self::load_profile_image(&client, config).await;

        Ok(AppContext {
            pricing,
            banner_image,
            profile_image,
            model_origin: source.describe(),
        })
    }

    /// `MODEL_PATH` wins over the hub when set
    pub fn artifact_source(config: &Config, client: Client) -> Box<dyn ArtifactSource> {
        match &config.model.local_path {
            Some(path) => Box::new(LocalArtifactSource::new(path.clone())),
            None => Box::new(
                HubArtifactSource::new(
                    client,
                    config.model.hub_endpoint.clone(),
                    config.model.repo_id.clone(),
                    config.model.filename.clone(),
                    config.model.revision.clone(),
                )
                .with_token(config.model.hub_token.clone()),
            ),
        }
    }

    pub async fn load_pricing(
        config: &Config,
        source: &dyn ArtifactSource,
    ) -> Result<PricingService> {
        let cpi_table = load_cpi_table(&config.assets.cpi_forecast_path)
            .context("Failed to load CPI forecast")?;
        let model = load_model(source)
            .await
            .context("Failed to load price model")?;

        info!("Pricing service ready ({} CPI years)", cpi_table.len());
        Ok(PricingService::new(model, Arc::new(cpi_table)))
    }

    /// Fetches the configured profile image, if any.
    pub async fn load_profile_image(client: &Client, config: &Config) -> Option<EmbeddedImage> {
        let url = config.assets.profile_image_url.as_deref()?;
        match fetch_image(client, url).await {
            Ok(image) => {
                info!("Fetched profile image ({} bytes)", image.bytes.len());
                Some(image)
            }
            Err(e) => {
                warn!("Profile image unavailable: {:#}", e);
                None
            }
        }
    }
}
