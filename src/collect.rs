use std::collections::HashMap;

use futures::StreamExt;
use tracing::info;

use crate::clients::TracesClient;
use crate::core::models::{CountryCategory, Establishment};
use crate::errors::PipelineError;

/// Fetch every published country category and keep the ones worth harvesting:
/// a valid country with at least one establishment.
pub async fn fetch_valid_categories(
    client: &TracesClient,
) -> Result<Vec<CountryCategory>, PipelineError> {
    let categories = client.fetch_country_categories().await?;
    let total = categories.len();

    let valid: Vec<CountryCategory> = futures::stream::iter(categories)
        .filter(|category| {
            let keep = category.country.is_valid() && category.number_of_establishments > 0;
            std::future::ready(keep)
        })
        .collect()
        .await;

    info!("Kept {} of {} country categories", valid.len(), total);

    Ok(valid)
}

/// Fetch the establishments behind each category and group them by the
/// country code on the establishment's own address.
///
/// Categories are fetched sequentially; the directory is public
/// infrastructure and the client paces its requests.
pub async fn collect_establishments(
    client: &TracesClient,
    categories: Vec<CountryCategory>,
) -> Result<HashMap<String, Vec<Establishment>>, PipelineError> {
    let mut grouped: HashMap<String, Vec<Establishment>> = HashMap::new();

    for category in categories {
        let establishments = client
            .fetch_establishments(&category.country.code, &category.classification_section_id.code)
            .await?;

        info!(
            "Fetched {} establishments for {}/{}",
            establishments.len(),
            category.country.code,
            category.classification_section_id.code
        );

        let mut stream = futures::stream::iter(establishments);
        while let Some(establishment) = stream.next().await {
            grouped
                .entry(establishment.country_code().to_string())
                .or_default()
                .push(establishment);
        }
    }

    Ok(grouped)
}
