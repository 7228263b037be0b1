use crate::models::{PropertyType, SearchCriteria};
use serde::Serialize;

/// Query parameters for the Zillow extended property search
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ZillowSearchParams {
    /// City/state string, e.g. "Boston, MA"
    pub location: String,
    pub status_type: &'static str,
    pub sort: &'static str,
    pub home_type: &'static str,
    /// Minimum price (USD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u64>,
    /// Maximum price (USD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u64>,
}

impl From<&SearchCriteria> for ZillowSearchParams {
    fn from(criteria: &SearchCriteria) -> Self {
        Self {
            location: criteria.location.clone(),
            status_type: "ForSale",
            sort: "Price_High_Low",
            home_type: home_type(criteria.property_type),
            price_min: criteria.min_price,
            price_max: criteria.max_price,
        }
    }
}

/// Zillow's name for each property type
pub fn home_type(property_type: PropertyType) -> &'static str {
    match property_type {
        PropertyType::SingleFamily => "Houses",
        PropertyType::Condo => "Condos",
        PropertyType::Townhouse => "Townhomes",
        PropertyType::MultiFamily => "Multi-family",
        PropertyType::Land => "Lots_Land",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_from_criteria() {
        let criteria = SearchCriteria::new("Kauai, HI")
            .with_property_type(PropertyType::Land)
            .with_price_range(None, Some(2_000_000));
        let params = ZillowSearchParams::from(&criteria);

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["location"], "Kauai, HI");
        assert_eq!(value["status_type"], "ForSale");
        assert_eq!(value["sort"], "Price_High_Low");
        assert_eq!(value["home_type"], "Lots_Land");
        assert_eq!(value["price_max"], 2_000_000);
        assert!(value.get("price_min").is_none());
    }
}
