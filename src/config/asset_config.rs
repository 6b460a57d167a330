//! Bundled data and image locations.

use std::path::PathBuf;

pub const DEFAULT_CPI_FORECAST_PATH: &str = "for_model_future_cpi_forecast.csv";
pub const DEFAULT_BANNER_IMAGE_PATH: &str = "hdb1.png";

#[derive(Debug, Clone)]
pub struct AssetEnvConfig {
    pub cpi_forecast_path: PathBuf,
    pub banner_image_path: PathBuf,
    pub profile_image_url: Option<String>,
}

impl AssetEnvConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cpi_forecast_path: lookup("CPI_FORECAST_PATH")
                .unwrap_or_else(|| DEFAULT_CPI_FORECAST_PATH.to_string())
                .into(),
            banner_image_path: lookup("BANNER_IMAGE_PATH")
                .unwrap_or_else(|| DEFAULT_BANNER_IMAGE_PATH.to_string())
                .into(),
            profile_image_url: lookup("PROFILE_IMAGE_URL").filter(|u| !u.is_empty()),
        }
    }
}
