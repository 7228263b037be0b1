use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of property a search is restricted to
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    #[default]
    SingleFamily,
    Condo,
    Townhouse,
    MultiFamily,
    Land,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "SINGLE_FAMILY",
            PropertyType::Condo => "CONDO",
            PropertyType::Townhouse => "TOWNHOUSE",
            PropertyType::MultiFamily => "MULTI_FAMILY",
            PropertyType::Land => "LAND",
        }
    }

    /// Plural noun used in human-readable summaries
    pub fn plural_noun(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "single-family homes",
            PropertyType::Condo => "condominiums",
            PropertyType::Townhouse => "townhouses",
            PropertyType::MultiFamily => "multi-family homes",
            PropertyType::Land => "land",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured search intent extracted from a free-text query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Location as sent to the listing provider ("Boston, MA")
    pub location: String,
    /// Minimum price (whole dollars)
    pub min_price: Option<u64>,
    /// Maximum price (whole dollars)
    pub max_price: Option<u64>,
    pub property_type: PropertyType,
}

impl SearchCriteria {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            min_price: None,
            max_price: None,
            property_type: PropertyType::default(),
        }
    }

    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }

    /// Set both price bounds. Inverted bounds are swapped so `min <= max` holds.
    pub fn with_price_range(mut self, min_price: Option<u64>, max_price: Option<u64>) -> Self {
        let (min_price, max_price) = match (min_price, max_price) {
            (Some(min), Some(max)) if min > max => (Some(max), Some(min)),
            bounds => bounds,
        };
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }
}

/// One normalized listing, ready for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: u64,
    #[serde(rename = "location")]
    pub location_text: String,
    pub summary: String,
    /// Empty when the provider had no image
    pub image_url: String,
    pub features: Vec<String>,
}
