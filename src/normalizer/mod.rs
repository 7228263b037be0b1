//! Maps raw provider records into [`Listing`]s.
//!
//! Provider payloads are inconsistent: the same concept shows up under
//! different keys and prices arrive as either numbers or "$1,234" strings.
//! Each field is read through an ordered alias list, and a record that
//! cannot be mapped is logged and dropped without affecting its neighbours.

use crate::models::Listing;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

const ID_FIELDS: &[&str] = &["zpid", "id"];
const TYPE_FIELDS: &[&str] = &["propertyType", "homeType"];
const IMAGE_FIELDS: &[&str] = &["imgSrc", "imageUrl"];
const LOCATION_FIELDS: &[&str] = &["streetAddress", "city", "state"];

/// (field, unit) pairs that make up the feature list, in display order
const FEATURE_FIELDS: &[(&str, &str)] = &[
    ("bedrooms", "bedrooms"),
    ("bathrooms", "bathrooms"),
    ("livingArea", "sqft"),
];

/// Why a single record was dropped
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("record is not an object")]
    NotAnObject,
    #[error("record has no price")]
    MissingPrice,
    #[error("unparsable price: {0}")]
    InvalidPrice(String),
    #[error("record has no identifier")]
    MissingId,
}

/// Normalize a batch of raw records, skipping the ones that cannot be mapped
pub fn normalize(raw_records: &[Value], fallback_location: &str) -> Vec<Listing> {
    let listings: Vec<Listing> = raw_records
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| match normalize_record(raw, fallback_location) {
            Ok(listing) => {
                debug!(id = %listing.id, "Processed listing");
                Some(listing)
            }
            Err(e) => {
                warn!(index, error = %e, record = %raw, "Skipping listing record");
                None
            }
        })
        .collect();

    info!(
        total = raw_records.len(),
        kept = listings.len(),
        "Normalized provider records"
    );
    listings
}

/// Normalize one raw record
pub fn normalize_record(raw: &Value, fallback_location: &str) -> Result<Listing, NormalizeError> {
    let record = raw.as_object().ok_or(NormalizeError::NotAnObject)?;

    let price = parse_price(record.get("price"))?;
    let id = first_present(record, ID_FIELDS)
        .map(stringify)
        .filter(|id| !id.is_empty())
        .ok_or(NormalizeError::MissingId)?;

    let property_type = first_text(record, TYPE_FIELDS).unwrap_or_else(|| "Property".to_string());
    let city = text_field(record, "city").unwrap_or_else(|| fallback_location.to_string());

    let location_text = LOCATION_FIELDS
        .iter()
        .filter_map(|field| text_field(record, field))
        .collect::<Vec<_>>()
        .join(", ");

    let features = FEATURE_FIELDS
        .iter()
        .filter_map(|(field, unit)| {
            record
                .get(*field)
                .filter(|value| is_truthy(value))
                .map(|value| format!("{} {}", stringify(value), unit))
        })
        .collect();

    let summary = format!(
        "{} with {} beds, {} baths",
        property_type,
        display_or_na(record.get("bedrooms")),
        display_or_na(record.get("bathrooms")),
    );

    Ok(Listing {
        id,
        title: format!("{} in {}", property_type, city),
        price,
        location_text,
        summary,
        image_url: first_text(record, IMAGE_FIELDS).unwrap_or_default(),
        features,
    })
}

fn parse_price(value: Option<&Value>) -> Result<u64, NormalizeError> {
    let parsed = match value {
        None | Some(Value::Null) => return Err(NormalizeError::MissingPrice),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.replace(['$', ','], "").trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(price) if price.is_finite() && price >= 0.0 => Ok(price.floor() as u64),
        _ => Err(NormalizeError::InvalidPrice(
            value.map(Value::to_string).unwrap_or_default(),
        )),
    }
}

fn first_present<'a>(record: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    fields
        .iter()
        .filter_map(|field| record.get(*field))
        .find(|value| !value.is_null())
}

fn first_text(record: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| text_field(record, field))
}

/// Non-empty, trimmed text value of a field
fn text_field(record: &Map<String, Value>, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Zero, empty and null values count as absent
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

fn display_or_na(value: Option<&Value>) -> String {
    match value {
        Some(v) if !v.is_null() => stringify(v),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> Value {
        json!({
            "zpid": 12345,
            "id": "ignored",
            "price": 450000,
            "bedrooms": 3,
            "bathrooms": 2.5,
            "livingArea": 1800,
            "propertyType": "CONDO",
            "homeType": "SINGLE_FAMILY",
            "streetAddress": " 1 Ocean Dr ",
            "city": "Miami",
            "state": "FL",
            "imgSrc": "https://img/1.jpg",
            "imageUrl": "https://img/2.jpg"
        })
    }

    #[test]
    fn test_full_record() {
        let listing = normalize_record(&full_record(), "Miami, FL").unwrap();
        assert_eq!(listing.id, "12345");
        assert_eq!(listing.title, "CONDO in Miami");
        assert_eq!(listing.price, 450_000);
        assert_eq!(listing.location_text, "1 Ocean Dr, Miami, FL");
        assert_eq!(listing.summary, "CONDO with 3 beds, 2.5 baths");
        assert_eq!(listing.image_url, "https://img/1.jpg");
        assert_eq!(
            listing.features,
            vec!["3 bedrooms", "2.5 bathrooms", "1800 sqft"]
        );
    }

    #[test]
    fn test_aliases_fall_back_in_order() {
        let record = json!({
            "id": 77,
            "price": "$1,250,000",
            "homeType": "TOWNHOUSE",
            "imageUrl": "https://img/2.jpg"
        });
        let listing = normalize_record(&record, "Boston, MA").unwrap();
        assert_eq!(listing.id, "77");
        assert_eq!(listing.price, 1_250_000);
        assert_eq!(listing.title, "TOWNHOUSE in Boston, MA");
        assert_eq!(listing.image_url, "https://img/2.jpg");
        assert_eq!(listing.summary, "TOWNHOUSE with N/A beds, N/A baths");
    }

    #[test]
    fn test_defaults_for_sparse_record() {
        let record = json!({ "zpid": "z1", "price": 99.9, "state": "HI" });
        let listing = normalize_record(&record, "Kapaa, HI").unwrap();
        assert_eq!(listing.title, "Property in Kapaa, HI");
        assert_eq!(listing.price, 99);
        assert_eq!(listing.location_text, "HI");
        assert_eq!(listing.image_url, "");
        assert!(listing.features.is_empty());
    }

    #[test]
    fn test_zero_features_are_omitted() {
        let record = json!({
            "zpid": 1,
            "price": 1,
            "bedrooms": 0,
            "bathrooms": 2,
            "livingArea": null
        });
        let listing = normalize_record(&record, "x").unwrap();
        assert_eq!(listing.features, vec!["2 bathrooms"]);
    }

    #[test]
    fn test_empty_location_segments_dropped() {
        let record = json!({
            "zpid": 1,
            "price": 1,
            "streetAddress": "",
            "city": "Chicago",
            "state": "  "
        });
        let listing = normalize_record(&record, "x").unwrap();
        assert_eq!(listing.location_text, "Chicago");
    }

    #[test]
    fn test_record_errors() {
        assert_eq!(
            normalize_record(&json!({ "zpid": 1 }), "x"),
            Err(NormalizeError::MissingPrice)
        );
        assert!(matches!(
            normalize_record(&json!({ "zpid": 1, "price": "call us" }), "x"),
            Err(NormalizeError::InvalidPrice(_))
        ));
        assert!(matches!(
            normalize_record(&json!({ "zpid": 1, "price": -5 }), "x"),
            Err(NormalizeError::InvalidPrice(_))
        ));
        assert_eq!(
            normalize_record(&json!({ "price": 10 }), "x"),
            Err(NormalizeError::MissingId)
        );
        assert_eq!(
            normalize_record(&json!("not a record"), "x"),
            Err(NormalizeError::NotAnObject)
        );
    }

    #[test]
    fn test_bad_records_do_not_stop_the_batch() {
        let records = vec![
            json!({ "zpid": 1, "price": 100 }),
            json!({ "zpid": 2 }),
            json!({ "zpid": 3, "price": "$300" }),
        ];
        let listings = normalize(&records, "Boston, MA");
        let ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(listings[1].price, 300);
    }
}
