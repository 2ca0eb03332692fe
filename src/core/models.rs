use serde::{Deserialize, Serialize};

/// Country status id the publication directory uses for listed countries.
const VALID_COUNTRY_STATUS: &str = "V";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCategory {
    pub sequence_number: i32,
    pub country: Country,
    pub classification_section_id: ClassificationSection,
    pub number_of_establishments: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub code: String,
    pub status: CountryStatus,
}

impl Country {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status.id == VALID_COUNTRY_STATUS
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStatus {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationSection {
    pub id: String,
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Establishment {
    pub operator_id: i32,
    pub operator_name: Option<String>,
    pub address: Address,
    pub approval_number: Option<String>,
}

impl Establishment {
    /// Trimmed approval number, or `None` when the listing has none.
    /// Establishments without one carry no packager code and are skipped.
    #[must_use]
    pub fn approval_number(&self) -> Option<&str> {
        self.approval_number
            .as_deref()
            .map(str::trim)
            .filter(|number| !number.is_empty())
    }

    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.address.city_reference.country.code
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Street,
    pub city_reference: City,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Street {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub city_id: i32,
    pub postal_code: Option<String>,
    pub name: Option<String>,
    pub country: Country,
}

/// One row of the exported CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackagerCode {
    pub name: String,
    pub code: String,
    pub lat: f64,
    pub lng: f64,
}

impl PackagerCode {
    /// EC identification mark as printed on packaging: country code,
    /// approval number, "EC" suffix.
    #[must_use]
    pub fn format_code(country_code: &str, approval_number: &str) -> String {
        format!("{country_code} {approval_number} EC")
    }
}
