//! Tests for the record-building stage. These exercise the skip conditions
//! that never reach the geocoder, so no network access is involved.

use std::collections::HashMap;
use std::time::Duration;

use packager_codes::clients::Geocoder;
use packager_codes::core::models::{
    Address, City, Country, CountryStatus, Establishment, Street,
};
use packager_codes::geocode::resolve_packager_codes;

fn establishment(approval: Option<&str>, street: &str, country: &str) -> Establishment {
    Establishment {
        operator_id: 1,
        operator_name: Some("Operator".to_string()),
        address: Address {
            street: Street {
                value: street.to_string(),
            },
            city_reference: City {
                city_id: 1,
                postal_code: None,
                name: None,
                country: Country {
                    code: country.to_string(),
                    status: CountryStatus {
                        id: "V".to_string(),
                    },
                },
            },
        },
        approval_number: approval.map(str::to_string),
    }
}

#[tokio::test]
async fn skips_establishments_without_approval_number() {
    let mut grouped = HashMap::new();
    grouped.insert(
        "FI".to_string(),
        vec![
            establishment(None, "1 Main St", "FI"),
            establishment(Some(""), "1 Main St", "FI"),
            establishment(Some("   "), "1 Main St", "FI"),
        ],
    );

    let geocoder = Geocoder::new(Duration::from_millis(0));
    let codes = resolve_packager_codes(&geocoder, grouped)
        .await
        .expect("resolution should succeed");

    assert!(codes.is_empty());
}

#[tokio::test]
async fn skips_establishments_with_blank_address() {
    // Street "." is a placeholder and the country code is empty, so there is
    // nothing to geocode.
    let mut grouped = HashMap::new();
    grouped.insert(
        String::new(),
        vec![establishment(Some("123"), ".", "")],
    );

    let geocoder = Geocoder::new(Duration::from_millis(0));
    let codes = resolve_packager_codes(&geocoder, grouped)
        .await
        .expect("resolution should succeed");

    assert!(codes.is_empty());
}
