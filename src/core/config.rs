use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::PipelineError;

/// Default publication directory host. Overridable so tests can point the
/// client at a local mock server.
pub const DEFAULT_BASE_URL: &str = "https://webgate.ec.europa.eu";

const DEFAULT_CATEGORY_PAGE_SIZE: u32 = 100;
const DEFAULT_ESTABLISHMENT_PAGE_SIZE: u32 = 200;
const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;
const DEFAULT_GEOCODE_DELAY_MS: u64 = 1000; // Nominatim usage policy: 1 request/second

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub category_page_size: u32,
    pub establishment_page_size: u32,
    pub request_delay: Duration,
    pub geocode_delay: Duration,
    pub output_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, PipelineError> {
        Ok(Self {
            base_url: env::var("TRACES_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            category_page_size: parse_var("TRACES_CATEGORY_PAGE_SIZE", DEFAULT_CATEGORY_PAGE_SIZE)?,
            establishment_page_size: parse_var("TRACES_PAGE_SIZE", DEFAULT_ESTABLISHMENT_PAGE_SIZE)?,
            request_delay: Duration::from_millis(parse_var(
                "TRACES_REQUEST_DELAY_MS",
                DEFAULT_REQUEST_DELAY_MS,
            )?),
            geocode_delay: Duration::from_millis(parse_var(
                "GEOCODE_DELAY_MS",
                DEFAULT_GEOCODE_DELAY_MS,
            )?),
            output_path: env::var("OUTPUT_PATH").ok().map(PathBuf::from),
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, PipelineError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| PipelineError::Config(format!("{name}: not a valid number: {raw}"))),
        Err(_) => Ok(default),
    }
}
