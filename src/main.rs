use anyhow::Result;
use tracing::info;

use packager_codes::clients::{Geocoder, TracesClient};
use packager_codes::core::config::AppConfig;
use packager_codes::{collect, export, geocode, setup_logging};

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let config = AppConfig::from_env()?;
    let client = TracesClient::new(&config)?;

    let categories = collect::fetch_valid_categories(&client).await?;
    let grouped = collect::collect_establishments(&client, categories).await?;
    info!("Collected establishments for {} countries", grouped.len());

    let geocoder = Geocoder::new(config.geocode_delay);
    let codes = geocode::resolve_packager_codes(&geocoder, grouped).await?;
    info!("Resolved {} packager codes", codes.len());

    export::write_output(&codes, config.output_path.as_deref())?;

    Ok(())
}
