use hotelview_catalog::{classify, format_currency, AmenityCategory, StarRating};
use hotelview_core::{HotelProperty, ItemId};
use serde::Serialize;

/// One amenity label with its resolved category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AmenityBadge {
    pub label: String,
    pub category: AmenityCategory,
    pub icon: &'static str,
}

impl AmenityBadge {
    pub fn new(label: &str) -> Self {
        let category = classify(label);
        Self {
            label: label.to_string(),
            category,
            icon: category.icon(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct CardState {
    pub is_booked: bool,
    pub is_booking: bool,
}

/// Label and enabled flag of the booking button
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingAction {
    pub label: &'static str,
    pub enabled: bool,
}

impl From<CardState> for BookingAction {
    fn from(state: CardState) -> Self {
        let label = if state.is_booking {
            "Booking..."
        } else if state.is_booked {
            "Booked"
        } else {
            "Book Hotel"
        };
        Self {
            label,
            enabled: !(state.is_booking || state.is_booked),
        }
    }
}

pub(crate) fn nights_label(nights: Option<i64>) -> String {
    match nights {
        Some(n) => format!("{} nights", n),
        None => "Dates unavailable".to_string(),
    }
}

/// Compact grid card for a property
#[derive(Debug, Clone, Serialize)]
pub struct HotelCard {
    pub item_id: ItemId,
    pub name: String,
    pub subtitle: String,
    /// First image, `None` renders the placeholder tile
    pub cover_image: Option<String>,
    pub price_per_night: String,
    pub total_price: String,
    pub nights_label: String,
    pub stars: Option<StarRating>,
    pub amenity_preview: Vec<AmenityBadge>,
    pub amenity_overflow: Option<String>,
    #[serde(flatten)]
    pub state: CardState,
    pub action: BookingAction,
}

impl HotelCard {
    pub fn build(
        property: &HotelProperty,
        item_id: ItemId,
        nights: Option<i64>,
        state: CardState,
        preview_len: usize,
    ) -> Self {
        let amenities = property.amenities();
        let amenity_preview = amenities
            .iter()
            .take(preview_len)
            .map(|label| AmenityBadge::new(label))
            .collect();
        let amenity_overflow = amenities
            .len()
            .checked_sub(preview_len)
            .filter(|extra| *extra > 0)
            .map(|extra| format!("+{}", extra));

        Self {
            item_id,
            name: property.name.clone(),
            subtitle: property.subtitle().to_string(),
            cover_image: property.images().first().cloned(),
            price_per_night: format_currency(property.rate_per_night, property.currency_code()),
            total_price: format!("Total: {}", format_currency(property.total_rate, property.currency_code())),
            nights_label: nights_label(nights),
            stars: StarRating::from_rating(property.overall_rating),
            amenity_preview,
            amenity_overflow,
            state,
            action: BookingAction::from(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_property() -> HotelProperty {
        let mut property = HotelProperty::new("Casa Azul");
        property.link = "https://example.com/casa-azul".to_string();
        property.hotel_class = Some("4-star hotel".to_string());
        property.overall_rating = Some(4.4);
        property.rate_per_night = Some(120.0);
        property.total_rate = Some(360.0);
        property.currency = "EUR".to_string();
        property.amenities = Some(vec![
            "Free WiFi".to_string(),
            "Pool".to_string(),
            "Restaurant".to_string(),
            "Pet-friendly".to_string(),
            "Ironing board".to_string(),
        ]);
        property.images = Some(vec!["https://img.example.com/a.jpg".to_string()]);
        property
    }

    #[test]
    fn test_card_preview_and_overflow() {
        let property = full_property();
        let id = ItemId::for_property(&property, 0);
        let card = HotelCard::build(&property, id, Some(3), CardState::default(), 3);

        assert_eq!(card.subtitle, "4-star hotel");
        assert_eq!(card.price_per_night, "€120");
        assert_eq!(card.total_price, "Total: €360");
        assert_eq!(card.nights_label, "3 nights");
        assert_eq!(card.amenity_preview.len(), 3);
        assert_eq!(card.amenity_preview[0].category, AmenityCategory::Network);
        assert_eq!(card.amenity_preview[2].icon, "utensils");
        assert_eq!(card.amenity_overflow.as_deref(), Some("+2"));
        assert_eq!(card.stars.as_ref().unwrap().filled, 4);
        assert_eq!(card.action.label, "Book Hotel");
        assert!(card.action.enabled);
    }

    #[test]
    fn test_card_placeholders_for_missing_fields() {
        let property = HotelProperty::new("Bare Hostel");
        let id = ItemId::for_property(&property, 7);
        let card = HotelCard::build(&property, id, None, CardState::default(), 3);

        assert_eq!(card.item_id.as_str(), "Bare Hostel-7");
        assert_eq!(card.cover_image, None);
        assert!(card.amenity_preview.is_empty());
        assert_eq!(card.amenity_overflow, None);
        assert_eq!(card.stars, None);
        assert_eq!(card.price_per_night, "$0");
        assert_eq!(card.nights_label, "Dates unavailable");
    }

    #[test]
    fn test_booking_action_states() {
        let booking = BookingAction::from(CardState { is_booked: false, is_booking: true });
        assert_eq!(booking.label, "Booking...");
        assert!(!booking.enabled);

        let booked = BookingAction::from(CardState { is_booked: true, is_booking: false });
        assert_eq!(booked.label, "Booked");
        assert!(!booked.enabled);

        // pending wins over booked for the label
        let both = BookingAction::from(CardState { is_booked: true, is_booking: true });
        assert_eq!(both.label, "Booking...");
    }

    #[test]
    fn test_card_serializes_flat_state() {
        let property = full_property();
        let id = ItemId::for_property(&property, 0);
        let card = HotelCard::build(&property, id, Some(2), CardState { is_booked: true, is_booking: false }, 3);
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["is_booked"], true);
        assert_eq!(value["item_id"], "https://example.com/casa-azul");
        assert_eq!(value["amenity_preview"][1]["category"], "water_spa");
    }
}
