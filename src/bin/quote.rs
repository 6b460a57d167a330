//! Headless price quote
//!
//! Runs the prediction pipeline once for the flat described on the command
//! line and prints the real and nominal prices.
//!
//! # Usage
//! ```sh
//! cargo run --bin quote -- --year 2030 --flat-type "4 room" --town punggol \
//!     --storey-range "10 TO 12" --html report.html
//! ```
//!
//! Model and CPI locations are read from the same environment variables as
//! the dashboard (`MODEL_REPO_ID`, `MODEL_PATH`, `CPI_FORECAST_PATH`, ...).

use anyhow::{Context, Result};
use clap::Parser;
use hdb_forecast::application::bootstrap::AppBootstrap;
use hdb_forecast::config::Config;
use hdb_forecast::domain::housing::FeatureRecord;
use hdb_forecast::infrastructure::HttpClientFactory;
use hdb_forecast::infrastructure::assets::read_image_file;
use hdb_forecast::interfaces::html_report::render_report;
use hdb_forecast::interfaces::view_models::PredictionViewModel;
use std::path::PathBuf;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Year of purchase (2025-2040)
    #[arg(long, default_value_t = 2025)]
    year: i64,

    /// Remaining lease in years (1-99)
    #[arg(long, default_value_t = 65)]
    lease_years_left: i64,

    /// Flat type, e.g. "4 room" or "executive"
    #[arg(long, default_value = "2 room")]
    flat_type: String,

    /// Town, e.g. "ang mo kio"
    #[arg(long, default_value = "ang mo kio")]
    town: String,

    /// Storey band, e.g. "04 TO 06"
    #[arg(long, default_value = "01 TO 03")]
    storey_range: String,

    /// Also write a standalone HTML report to this path
    #[arg(long)]
    html: Option<PathBuf>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for the quote
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stderr_layer)
        .init();

    let args = Args::parse();
    let record = FeatureRecord::parse(
        args.year,
        args.lease_years_left,
        &args.flat_type,
        &args.town,
        &args.storey_range,
    )?;

    let config = Config::from_env()?;
    let client = HttpClientFactory::create_client(config.model.connect_timeout);
    let source = AppBootstrap::artifact_source(&config, client.clone());
    let pricing = AppBootstrap::load_pricing(&config, source.as_ref()).await?;

    let result = pricing.quote(&record)?;
    info!("Quoted {:?}: {:?}", record, result);

    if args.json {
        let payload = serde_json::json!({
            "features": record,
            "prediction": result,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        let view = PredictionViewModel::build(&record, &result);
        for (label, value) in &view.inputs {
            println!("{}: {}", label, value);
        }
        println!("{}", view.real_price_line());
        println!("{}", view.nominal_price_line());
    }

    if let Some(path) = args.html {
        let banner = match read_image_file(&config.assets.banner_image_path) {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Banner image unavailable: {:#}", e);
                None
            }
        };
        // Fetched per render
        let profile = AppBootstrap::load_profile_image(&client, &config).await;

        let html = render_report(&record, &result, banner.as_ref(), profile.as_ref());
        std::fs::write(&path, html)
            .with_context(|| format!("Failed to write report to {:?}", path))?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}
