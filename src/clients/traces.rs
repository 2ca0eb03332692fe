//! TRACES-NT publication directory client
//!
//! Encapsulates the two listing endpoints with retry logic and offset paging.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};
use tracing::debug;
use url::Url;
use urlencoding::encode;

use crate::core::config::AppConfig;
use crate::core::models::{CountryCategory, Establishment};
use crate::errors::PipelineError;

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("packager-codes/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Typed client for the publication directory listing endpoints.
pub struct TracesClient {
    base_url: String,
    category_page_size: u32,
    establishment_page_size: u32,
    request_delay: Duration,
}

impl TracesClient {
    pub fn new(config: &AppConfig) -> Result<Self, PipelineError> {
        // Parse once up front so a malformed override fails before any fetching.
        Url::parse(&config.base_url)
            .map_err(|e| PipelineError::Config(format!("TRACES_BASE_URL: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            category_page_size: config.category_page_size,
            establishment_page_size: config.establishment_page_size,
            request_delay: config.request_delay,
        })
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, PipelineError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, PipelineError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);

        Retry::spawn(strategy, operation).await
    }

    async fn get_json<T>(&self, url: Url) -> Result<T, PipelineError>
    where
        T: DeserializeOwned + Send,
    {
        self.with_retry(|| async {
            debug!("GET {url}");
            let response = HTTP_CLIENT.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(PipelineError::Http(format!(
                    "{url}: unexpected status {status}"
                )));
            }

            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| PipelineError::Parse(format!("{url}: {e}")))
        })
        .await
    }

    /// Every (country, classification section) pair the directory publishes.
    ///
    /// Pages through the listing until the server returns a short page; each
    /// element is fetched exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request still fails after retries.
    pub async fn fetch_country_categories(&self) -> Result<Vec<CountryCategory>, PipelineError> {
        let mut offset = 0;
        let mut categories = Vec::new();

        loop {
            let page = self
                .fetch_country_categories_page(offset, self.category_page_size)
                .await?;
            let fetched = page.len() as u32;
            categories.extend(page);

            if fetched < self.category_page_size {
                break;
            }
            offset += fetched;
            tokio::time::sleep(self.request_delay).await;
        }

        Ok(categories)
    }

    async fn fetch_country_categories_page(
        &self,
        offset: u32,
        max: u32,
    ) -> Result<Vec<CountryCategory>, PipelineError> {
        let base = format!(
            "{}/tracesnt/directory/publication/establishment?sort=country.translation",
            self.base_url
        );
        let url = Url::parse_with_params(
            &base,
            &[("max", max.to_string()), ("offset", offset.to_string())],
        )?;

        self.get_json(url).await
    }

    /// All establishments published for one country and classification section.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request still fails after retries.
    pub async fn fetch_establishments(
        &self,
        country_code: &str,
        section_code: &str,
    ) -> Result<Vec<Establishment>, PipelineError> {
        let mut offset = 0;
        let mut establishments = Vec::new();

        loop {
            let page = self
                .fetch_establishments_page(
                    country_code,
                    section_code,
                    offset,
                    self.establishment_page_size,
                )
                .await?;
            let fetched = page.len() as u32;
            establishments.extend(page);

            if fetched < self.establishment_page_size {
                break;
            }
            offset += fetched;
            tokio::time::sleep(self.request_delay).await;
        }

        Ok(establishments)
    }

    async fn fetch_establishments_page(
        &self,
        country_code: &str,
        section_code: &str,
        offset: u32,
        max: u32,
    ) -> Result<Vec<Establishment>, PipelineError> {
        let base = format!(
            "{}/tracesnt/directory/publication/establishment/establishments/{cc}/{section}?sort=operatorName",
            self.base_url,
            cc = encode(country_code),
            section = encode(section_code),
        );
        let url = Url::parse_with_params(
            &base,
            &[("max", max.to_string()), ("offset", offset.to_string())],
        )?;

        self.get_json(url).await
    }
}
