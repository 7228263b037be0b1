use crate::models::SearchCriteria;

/// One-sentence description of the applied search criteria
pub fn summarize(criteria: &SearchCriteria) -> String {
    let mut summary = format!(
        "Looking for {} in {}",
        criteria.property_type.plural_noun(),
        criteria.location
    );

    let price_clause = match (criteria.min_price, criteria.max_price) {
        (Some(min), Some(max)) => Some(format!(
            "priced between {} and {}",
            format_dollars(min),
            format_dollars(max)
        )),
        (Some(min), None) => Some(format!("priced above {}", format_dollars(min))),
        (None, Some(max)) => Some(format!("priced under {}", format_dollars(max))),
        (None, None) => None,
    };

    if let Some(clause) = price_clause {
        summary.push(' ');
        summary.push_str(&clause);
    }
    summary
}

/// Format whole dollars with thousands separators: `$1,234,567`
pub fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;

    #[test]
    fn test_max_price_only() {
        let criteria = SearchCriteria::new("Miami, FL")
            .with_property_type(PropertyType::Condo)
            .with_price_range(None, Some(750_000));
        assert_eq!(
            summarize(&criteria),
            "Looking for condominiums in Miami, FL priced under $750,000"
        );
    }

    #[test]
    fn test_both_bounds() {
        let criteria =
            SearchCriteria::new("Boston, MA").with_price_range(Some(250_000), Some(1_500_000));
        assert_eq!(
            summarize(&criteria),
            "Looking for single-family homes in Boston, MA priced between $250,000 and $1,500,000"
        );
    }

    #[test]
    fn test_min_only_and_no_price() {
        let criteria = SearchCriteria::new("Kauai, HI")
            .with_property_type(PropertyType::Land)
            .with_price_range(Some(100), None);
        assert_eq!(summarize(&criteria), "Looking for land in Kauai, HI priced above $100");

        let criteria =
            SearchCriteria::new("Chicago, IL").with_property_type(PropertyType::MultiFamily);
        assert_eq!(summarize(&criteria), "Looking for multi-family homes in Chicago, IL");
    }

    #[test]
    fn test_summarize_is_repeatable() {
        let criteria = SearchCriteria::new("Poipu, HI")
            .with_property_type(PropertyType::Townhouse)
            .with_price_range(Some(400_000), Some(900_000));
        assert_eq!(summarize(&criteria), summarize(&criteria));
        assert_eq!(summarize(&criteria), summarize(&criteria.clone()));
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(999), "$999");
        assert_eq!(format_dollars(1_000), "$1,000");
        assert_eq!(format_dollars(12_345_678), "$12,345,678");
    }
}
