/// packager-codes - harvests the EU TRACES-NT publication directory and
/// exports geocoded packager codes as CSV.
///
/// The pipeline has four stages:
/// 1. Discover every (country, classification section) pair the directory
///    publishes and keep valid, non-empty ones.
/// 2. Page through the establishment listings behind each pair and group
///    them by the country on the establishment's address.
/// 3. Forward-geocode each establishment that carries an approval number
///    against OpenStreetMap Nominatim.
/// 4. Serialize the resulting records to CSV on stdout (or a file).
///
/// # Architecture
///
/// The system uses:
/// - reqwest for the publication directory HTTP calls
/// - tokio-retry for exponential backoff around every page request
/// - the geocoding crate (on the blocking thread pool) for Nominatim lookups
/// - csv/serde for the export format
/// - Tokio for the async runtime
///
/// # Example
///
/// ```no_run
/// use packager_codes::clients::{Geocoder, TracesClient};
/// use packager_codes::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     packager_codes::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let client = TracesClient::new(&config)?;
///
///     let categories = packager_codes::collect::fetch_valid_categories(&client).await?;
///     let grouped = packager_codes::collect::collect_establishments(&client, categories).await?;
///
///     let geocoder = Geocoder::new(config.geocode_delay);
///     let codes = packager_codes::geocode::resolve_packager_codes(&geocoder, grouped).await?;
///
///     packager_codes::export::write_output(&codes, config.output_path.as_deref())?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod clients;
pub mod collect;
pub mod core;
pub mod errors;
pub mod export;
pub mod geocode;
pub mod utils;

/// Configure structured logging on stderr.
///
/// stdout is reserved for the CSV export, so the fmt layer writes to stderr.
/// The filter honors `RUST_LOG` and defaults to `info`.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
