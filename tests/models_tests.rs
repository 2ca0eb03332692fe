use packager_codes::core::models::{CountryCategory, Establishment};

#[test]
fn deserializes_country_category_listing() {
    let body = r#"[
        {
            "sequenceNumber": 1,
            "country": { "code": "FI", "status": { "id": "V" } },
            "classificationSectionId": { "id": "sec-4", "code": "IV" },
            "numberOfEstablishments": 12
        },
        {
            "sequenceNumber": 2,
            "country": { "code": "XX", "status": { "id": "S" } },
            "classificationSectionId": { "id": "sec-9", "code": "IX" },
            "numberOfEstablishments": 0
        }
    ]"#;

    let categories: Vec<CountryCategory> =
        serde_json::from_str(body).expect("listing should deserialize");

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].country.code, "FI");
    assert!(categories[0].country.is_valid());
    assert_eq!(categories[0].classification_section_id.code, "IV");
    assert_eq!(categories[0].number_of_establishments, 12);
    assert!(!categories[1].country.is_valid());
}

#[test]
fn deserializes_establishment_with_full_address() {
    let body = r#"{
        "operatorId": 4711,
        "operatorName": "Acme Dairy Oy",
        "address": {
            "street": { "value": "1 Main St" },
            "cityReference": {
                "cityId": 99,
                "postalCode": "00100",
                "name": "Helsinki",
                "country": { "code": "FI", "status": { "id": "V" } }
            }
        },
        "approvalNumber": "123-4"
    }"#;

    let establishment: Establishment =
        serde_json::from_str(body).expect("establishment should deserialize");

    assert_eq!(establishment.operator_id, 4711);
    assert_eq!(establishment.operator_name.as_deref(), Some("Acme Dairy Oy"));
    assert_eq!(establishment.approval_number(), Some("123-4"));
    assert_eq!(establishment.country_code(), "FI");
    assert_eq!(
        establishment.address.city_reference.postal_code.as_deref(),
        Some("00100")
    );
}

#[test]
fn tolerates_missing_optional_fields() {
    // Listings routinely omit the operator name, postal code, and approval
    // number, or publish them as explicit nulls.
    let body = r#"{
        "operatorId": 8,
        "operatorName": null,
        "address": {
            "street": { "value": "." },
            "cityReference": {
                "cityId": 3,
                "postalCode": null,
                "name": null,
                "country": { "code": "PT", "status": { "id": "V" } }
            }
        }
    }"#;

    let establishment: Establishment =
        serde_json::from_str(body).expect("establishment should deserialize");

    assert_eq!(establishment.operator_name, None);
    assert_eq!(establishment.approval_number(), None);
    assert_eq!(establishment.address.city_reference.postal_code, None);
}
