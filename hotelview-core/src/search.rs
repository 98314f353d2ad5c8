use serde::{Deserialize, Deserializer, Serialize};
use chrono::NaiveDate;
use crate::identity::ItemId;
use crate::{CoreError, CoreResult};

pub const DEFAULT_CURRENCY: &str = "USD";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

// Upstream sends explicit nulls for fields it has no value for; treat them
// like absent keys instead of rejecting the snapshot.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_currency<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_currency))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One hotel search result, as delivered by the upstream search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelProperty {
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub property_type: String,
    #[serde(default)]
    pub hotel_class: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default)]
    pub overall_rating: Option<f64>,
    #[serde(default)]
    pub rate_per_night: Option<f64>,
    #[serde(default)]
    pub total_rate: Option<f64>,
    #[serde(default = "default_currency", deserialize_with = "null_as_default_currency")]
    pub currency: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl HotelProperty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property_type: "hotel".to_string(),
            hotel_class: None,
            link: String::new(),
            overall_rating: None,
            rate_per_night: None,
            total_rate: None,
            currency: default_currency(),
            coordinates: None,
            check_in: None,
            check_out: None,
            amenities: None,
            images: None,
        }
    }

    /// Currency code, falling back to USD when the upstream sent an empty one
    pub fn currency_code(&self) -> &str {
        if self.currency.trim().is_empty() {
            DEFAULT_CURRENCY
        } else {
            &self.currency
        }
    }

    pub fn amenities(&self) -> &[String] {
        self.amenities.as_deref().unwrap_or_default()
    }

    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or_default()
    }

    /// `hotel_class` when present, otherwise the property type
    pub fn subtitle(&self) -> &str {
        match self.hotel_class.as_deref() {
            Some(class) if !class.is_empty() => class,
            _ => &self.property_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchParameters {
    pub query: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub adults: u32,
    #[serde(default = "default_currency", deserialize_with = "null_as_default_currency")]
    pub currency: String,
}

impl SearchParameters {
    pub fn check_in(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.check_in_date)
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.check_out_date)
    }
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    // Accept both plain dates and full timestamps
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Immutable snapshot of one search, handed to the view as a whole
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub search_parameters: SearchParameters,
    pub total_results: u64,
    #[serde(default)]
    pub properties: Vec<HotelProperty>,
}

impl SearchResult {
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::MalformedSnapshot(e.to_string()))
    }

    /// Identifier of the property at `index` in the snapshot order
    pub fn item_id(&self, index: usize) -> Option<ItemId> {
        self.properties
            .get(index)
            .map(|property| ItemId::for_property(property, index))
    }

    /// Locate a property by identifier, returning its snapshot index
    pub fn find(&self, item_id: &ItemId) -> Option<(usize, &HotelProperty)> {
        self.properties
            .iter()
            .enumerate()
            .find(|(index, property)| ItemId::for_property(property, *index) == *item_id)
    }
}
