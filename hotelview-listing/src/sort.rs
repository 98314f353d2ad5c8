use hotelview_core::HotelProperty;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// User-selectable grid ordering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Price,
    Rating,
    Name,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortKey::Price),
            "rating" => Ok(SortKey::Rating),
            "name" => Ok(SortKey::Name),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

impl SortKey {
    pub fn compare(&self, a: &HotelProperty, b: &HotelProperty) -> Ordering {
        match self {
            SortKey::Price => {
                let price_a = a.rate_per_night.unwrap_or(0.0);
                let price_b = b.rate_per_night.unwrap_or(0.0);
                price_a.partial_cmp(&price_b).unwrap_or(Ordering::Equal)
            }
            SortKey::Rating => {
                let rating_a = a.overall_rating.unwrap_or(0.0);
                let rating_b = b.overall_rating.unwrap_or(0.0);
                rating_b.partial_cmp(&rating_a).unwrap_or(Ordering::Equal)
            }
            SortKey::Name => compare_names(&a.name, &b.name),
        }
    }
}

/// Accent- and case-insensitive first, so "Élan" files under "e".
/// Ties go unaccented before accented, then lower-case before upper-case.
fn compare_names(a: &str, b: &str) -> Ordering {
    fold_name(a)
        .cmp(&fold_name(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lower-cased base letters with diacritics stripped
fn fold_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Stable permutation of `properties` indexes in display order
pub fn sort_order(properties: &[HotelProperty], key: SortKey) -> Vec<usize> {
    let mut order: Vec<usize> = (0..properties.len()).collect();
    // slice::sort_by is stable, equal keys keep snapshot order
    order.sort_by(|&a, &b| key.compare(&properties[a], &properties[b]));
    order
}

/// Sorted copy of `properties`; the input is left untouched
pub fn sort_properties(properties: &[HotelProperty], key: SortKey) -> Vec<HotelProperty> {
    sort_order(properties, key)
        .into_iter()
        .map(|index| properties[index].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(name: &str, rate: Option<f64>) -> HotelProperty {
        let mut property = HotelProperty::new(name);
        property.rate_per_night = rate;
        property
    }

    fn rated(name: &str, rating: Option<f64>) -> HotelProperty {
        let mut property = HotelProperty::new(name);
        property.overall_rating = rating;
        property
    }

    fn names(properties: &[HotelProperty]) -> Vec<&str> {
        properties.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_price_ascending_missing_first() {
        let input = vec![priced("a", Some(50.0)), priced("b", None), priced("c", Some(20.0))];
        let sorted = sort_properties(&input, SortKey::Price);
        assert_eq!(names(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rating_descending_missing_last() {
        let input = vec![rated("a", Some(3.0)), rated("b", None), rated("c", Some(4.5))];
        let sorted = sort_properties(&input, SortKey::Rating);
        assert_eq!(names(&sorted), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let input = vec![
            HotelProperty::new("zephyr"),
            HotelProperty::new("Alpine Lodge"),
            HotelProperty::new("beacon"),
            HotelProperty::new("Beacon"),
        ];
        let sorted = sort_properties(&input, SortKey::Name);
        assert_eq!(names(&sorted), vec!["Alpine Lodge", "beacon", "Beacon", "zephyr"]);
    }

    #[test]
    fn test_name_folds_accents() {
        let input = vec![
            HotelProperty::new("Zenith Hotel"),
            HotelProperty::new("Élan Hotel"),
            HotelProperty::new("Hôtel Bristol"),
            HotelProperty::new("Hotel Zeta"),
        ];
        let sorted = sort_properties(&input, SortKey::Name);
        assert_eq!(
            names(&sorted),
            vec!["Élan Hotel", "Hôtel Bristol", "Hotel Zeta", "Zenith Hotel"]
        );
    }

    #[test]
    fn test_accent_only_difference_puts_plain_first() {
        let input = vec![HotelProperty::new("Café Lisboa"), HotelProperty::new("Cafe Lisboa")];
        let sorted = sort_properties(&input, SortKey::Name);
        assert_eq!(names(&sorted), vec!["Cafe Lisboa", "Café Lisboa"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = vec![
            priced("first", Some(80.0)),
            priced("second", None),
            priced("third", Some(80.0)),
            priced("fourth", None),
            HotelProperty::new("Same"),
        ];
        let sorted = sort_properties(&input, SortKey::Price);
        assert_eq!(names(&sorted), vec!["second", "fourth", "Same", "first", "third"]);

        let dup = vec![rated("x", Some(4.0)), rated("y", Some(4.0)), rated("z", Some(4.0))];
        assert_eq!(names(&sort_properties(&dup, SortKey::Rating)), vec!["x", "y", "z"]);

        let same_name = vec![priced("Inn", Some(1.0)), priced("Inn", Some(2.0))];
        let sorted = sort_properties(&same_name, SortKey::Name);
        assert_eq!(sorted[0].rate_per_night, Some(1.0));
        assert_eq!(sorted[1].rate_per_night, Some(2.0));
    }

    #[test]
    fn test_input_not_mutated() {
        let input = vec![priced("a", Some(50.0)), priced("b", None), priced("c", Some(20.0))];
        let snapshot = input.clone();
        let _ = sort_properties(&input, SortKey::Price);
        let _ = sort_properties(&input, SortKey::Rating);
        let _ = sort_properties(&input, SortKey::Name);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_sort_order_returns_snapshot_indexes() {
        let input = vec![priced("a", Some(50.0)), priced("b", None), priced("c", Some(20.0))];
        assert_eq!(sort_order(&input, SortKey::Price), vec![1, 2, 0]);
        assert!(sort_order(&[], SortKey::Name).is_empty());
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert_eq!(SortKey::default(), SortKey::Price);
        assert!("distance".parse::<SortKey>().is_err());
        let key: SortKey = serde_json::from_str("\"name\"").unwrap();
        assert_eq!(key, SortKey::Name);
    }
}
