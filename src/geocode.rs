use std::collections::HashMap;

use tracing::debug;

use crate::clients::Geocoder;
use crate::core::models::{Establishment, PackagerCode};
use crate::errors::PipelineError;
use crate::utils::address::build_address_line;

/// Turn grouped establishments into geocoded packager code records.
///
/// Establishments without a usable approval number carry no packager code
/// and are dropped; so are establishments whose address is blank or that
/// the geocoder cannot resolve. Output is sorted by code so repeated runs
/// over the same data produce identical CSV.
pub async fn resolve_packager_codes(
    geocoder: &Geocoder,
    grouped: HashMap<String, Vec<Establishment>>,
) -> Result<Vec<PackagerCode>, PipelineError> {
    let mut codes = Vec::new();

    for (_, establishments) in grouped {
        for establishment in establishments {
            let Some(approval_number) = establishment.approval_number() else {
                continue;
            };

            let address_line = build_address_line(&establishment.address);
            if address_line.is_empty() {
                debug!(
                    "Skipping operator {}: no address components",
                    establishment.operator_id
                );
                continue;
            }

            let Some(point) = geocoder.locate(&address_line).await? else {
                debug!(
                    "Skipping operator {}: no geocoder match for {address_line:?}",
                    establishment.operator_id
                );
                continue;
            };

            codes.push(PackagerCode {
                name: establishment
                    .operator_name
                    .clone()
                    .unwrap_or_default(),
                code: PackagerCode::format_code(establishment.country_code(), approval_number),
                // Nominatim points are (lon, lat)
                lat: point.y(),
                lng: point.x(),
            });
        }
    }

    codes.sort_by(|a, b| a.code.cmp(&b.code).then_with(|| a.name.cmp(&b.name)));

    Ok(codes)
}
