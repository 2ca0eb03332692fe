use crate::core::models::Address;

/// Free-form address line for geocoding: street, postal code, country code,
/// comma-separated, skipping components the listing left blank.
///
/// TRACES records with no street frequently carry the placeholder `"."`,
/// which is dropped like an empty value.
#[must_use]
pub fn build_address_line(address: &Address) -> String {
    let mut components: Vec<&str> = Vec::new();

    let street = address.street.value.trim();
    if !street.is_empty() && street != "." {
        components.push(street);
    }

    if let Some(postal_code) = address.city_reference.postal_code.as_deref() {
        let postal_code = postal_code.trim();
        if !postal_code.is_empty() {
            components.push(postal_code);
        }
    }

    let country_code = address.city_reference.country.code.trim();
    if !country_code.is_empty() {
        components.push(country_code);
    }

    components.join(", ")
}
