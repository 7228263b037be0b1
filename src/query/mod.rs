//! Natural-language query interpreter.
//!
//! Turns free text such as "3 bedroom condos near Chicago under 500k" into
//! [`SearchCriteria`]. Every extraction step is an ordered rule list: the
//! first rule that matches wins, so rule order is part of the contract.

use crate::models::{PropertyType, SearchCriteria};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

/// The query carried no recognisable location
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please specify a location in your search query (e.g., 'in Boston' or 'near Chicago')")]
pub struct MissingLocationError;

#[derive(Debug, Clone, Copy)]
enum Scale {
    Unit,
    Million,
}

struct PriceRule {
    pattern: Regex,
    scale: Scale,
}

impl PriceRule {
    fn new(pattern: &str, scale: Scale) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            scale,
        }
    }
}

lazy_static! {
    // "in X", "at X", "near X", tried in this order
    static ref LOCATION_RULES: Vec<Regex> = vec![
        Regex::new(r"(?i)\bin ([A-Za-z\s,]+)").unwrap(),
        Regex::new(r"(?i)\bat ([A-Za-z\s,]+)").unwrap(),
        Regex::new(r"(?i)\bnear ([A-Za-z\s,]+)").unwrap(),
    ];

    static ref WORD_REGEX: Regex = Regex::new(r"[A-Za-z]+").unwrap();

    // Applied to the lowercased query, tried in this order
    static ref PRICE_RULES: Vec<PriceRule> = vec![
        PriceRule::new(r"under ?\$?(\d+(?:\.\d+)?)\s*million", Scale::Million),
        PriceRule::new(r"under ?\$?(\d[\d,]*(?:\.\d+)?)(k\b)?", Scale::Unit),
        PriceRule::new(r"less than ?\$?(\d+(?:\.\d+)?)\s*million", Scale::Million),
        PriceRule::new(r"less than ?\$?(\d[\d,]*(?:\.\d+)?)(k\b)?", Scale::Unit),
        PriceRule::new(r"\$?(\d+(?:\.\d+)?)\s*million", Scale::Million),
        PriceRule::new(r"\$?(\d[\d,]*(?:\.\d+)?)(k\b)?", Scale::Unit),
    ];
}

/// Words that end a captured location ("near Chicago under 500k" -> "Chicago")
const LOCATION_STOP_WORDS: &[&str] = &[
    "under", "less", "below", "above", "over", "priced", "between", "around", "with", "for",
    "near", "at", "in", "and", "condo", "condos", "home", "homes", "house", "houses", "townhouse",
    "townhouses", "land", "lot", "lots", "property", "properties", "bedroom", "bedrooms",
    "bathroom", "bathrooms",
];

/// Property-type keywords, checked as substrings of the lowercased query in order
const PROPERTY_TYPE_RULES: &[(&[&str], PropertyType)] = &[
    (&["land", "lot"], PropertyType::Land),
    (&["condo"], PropertyType::Condo),
    (&["townhouse", "town house"], PropertyType::Townhouse),
    (&["multi"], PropertyType::MultiFamily),
];

/// Interpret a free-text query into structured search criteria
pub fn interpret(query: &str) -> Result<SearchCriteria, MissingLocationError> {
    info!(query, "Interpreting search query");

    let location = extract_location(query)?;
    let property_type = extract_property_type(query);
    let max_price = extract_max_price(query);

    let criteria = SearchCriteria::new(location)
        .with_property_type(property_type)
        .with_price_range(None, max_price);

    info!(
        location = %criteria.location,
        property_type = %criteria.property_type,
        max_price = ?criteria.max_price,
        "Extracted search criteria"
    );
    Ok(criteria)
}

/// Extract the search location, appending a state for well-known cities
pub fn extract_location(query: &str) -> Result<String, MissingLocationError> {
    for rule in LOCATION_RULES.iter() {
        let Some(captures) = rule.captures(query) else {
            continue;
        };
        let location = cut_at_stop_word(&captures[1]);
        if location.is_empty() {
            continue;
        }

        debug!(pattern = rule.as_str(), location, "Matched location pattern");
        if location.contains(',') {
            return Ok(location.to_string());
        }
        return Ok(match state_suffix(location) {
            Some(state) => format!("{}, {}", location, state),
            None => location.to_string(),
        });
    }

    if let Some(first) = query.split_whitespace().next() {
        if first.chars().next().is_some_and(char::is_uppercase) {
            debug!(location = first, "Using first capitalized word as location");
            return Ok(first.to_string());
        }
    }

    info!("No location found in query");
    Err(MissingLocationError)
}

/// The first word is always kept, so "Land O Lakes" survives intact
fn cut_at_stop_word(captured: &str) -> &str {
    let end = WORD_REGEX
        .find_iter(captured)
        .skip(1)
        .find(|word| {
            let lower = word.as_str().to_lowercase();
            LOCATION_STOP_WORDS.contains(&lower.as_str())
        })
        .map(|word| word.start())
        .unwrap_or(captured.len());

    captured[..end].trim_matches(|c: char| c == ',' || c.is_whitespace())
}

/// Closed city -> state lookup for locations given without a state
fn state_suffix(city: &str) -> Option<&'static str> {
    match city.to_lowercase().as_str() {
        "boston" => Some("MA"),
        "new york" | "nyc" => Some("NY"),
        "miami" => Some("FL"),
        "chicago" => Some("IL"),
        "los angeles" => Some("CA"),
        "princeville" | "kapaa" | "poipu" | "kauai" => Some("HI"),
        _ => None,
    }
}

/// Extract the property type, defaulting to single-family
pub fn extract_property_type(query: &str) -> PropertyType {
    let lower = query.to_lowercase();
    PROPERTY_TYPE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, property_type)| *property_type)
        .unwrap_or_default()
}

/// Extract a price ceiling.
///
/// The final rule accepts any bare number in the query, so a street number or
/// bedroom count can end up as the ceiling when no price phrase is present.
pub fn extract_max_price(query: &str) -> Option<u64> {
    let lower = query.to_lowercase();

    for rule in PRICE_RULES.iter() {
        let Some(captures) = rule.pattern.captures(&lower) else {
            continue;
        };
        let thousands = captures.get(2).is_some();
        match parse_price(&captures[1], rule.scale, thousands) {
            Some(price) => {
                debug!(pattern = rule.pattern.as_str(), price, "Extracted max price");
                return Some(price);
            }
            None => {
                debug!(pattern = rule.pattern.as_str(), raw = &captures[1], "Unparsable price");
            }
        }
    }

    None
}

fn parse_price(raw: &str, scale: Scale, thousands: bool) -> Option<u64> {
    let value: f64 = raw.replace(',', "").parse().ok()?;
    let value = match scale {
        Scale::Million => value * 1_000_000.0,
        Scale::Unit if thousands => value * 1_000.0,
        Scale::Unit => value,
    };

    let floored = value.floor();
    if !floored.is_finite() || floored < 1.0 || floored >= u64::MAX as f64 {
        return None;
    }
    Some(floored as u64)
}
