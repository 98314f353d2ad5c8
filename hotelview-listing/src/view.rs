use hotelview_catalog::{
    format_currency, format_stay_date, group_thousands, nights_between, ImageGallery, StarRating,
};
use hotelview_core::{HotelProperty, ItemId, SearchParameters, SearchResult};
use serde::{Deserialize, Serialize};
use crate::card::{nights_label, AmenityBadge, BookingAction, CardState, HotelCard};
use crate::sort::{sort_order, SortKey};

/// Layout knobs for the results view
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Cards shown before the "view more" button
    pub page_size: usize,
    /// Amenity icons shown on a compact card
    pub amenity_preview: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            page_size: 9,
            amenity_preview: 3,
        }
    }
}

fn stay_nights(params: &SearchParameters) -> Option<i64> {
    nights_between(params.check_in(), params.check_out())
}

/// Sorted grid of hotel cards with its header
#[derive(Debug, Clone, Serialize)]
pub struct HotelGrid {
    pub title: String,
    pub subtitle: String,
    pub sort: SortKey,
    pub cards: Vec<HotelCard>,
    pub more_count: usize,
    pub more_label: Option<String>,
}

impl HotelGrid {
    /// Build the grid; `state_of` reports booked/pending flags per identifier
    pub fn build<F>(result: &SearchResult, sort: SortKey, options: ViewOptions, state_of: F) -> Self
    where
        F: Fn(&ItemId) -> CardState,
    {
        let nights = stay_nights(&result.search_parameters);
        let cards: Vec<HotelCard> = sort_order(&result.properties, sort)
            .into_iter()
            .take(options.page_size)
            .map(|index| {
                let property = &result.properties[index];
                let item_id = ItemId::for_property(property, index);
                let state = state_of(&item_id);
                HotelCard::build(property, item_id, nights, state, options.amenity_preview)
            })
            .collect();

        let more_count = result.properties.len().saturating_sub(options.page_size);
        tracing::debug!(
            "Built grid for '{}' sorted by {:?}: {} cards, {} more",
            result.search_parameters.query,
            sort,
            cards.len(),
            more_count
        );

        Self {
            title: format!("Hotels in {}", result.search_parameters.query),
            subtitle: format!("{} properties found", group_thousands(result.total_results)),
            sort,
            cards,
            more_count,
            more_label: (more_count > 0).then(|| format!("View {} more hotels", more_count)),
        }
    }
}

/// Check-in or check-out column of the booking summary
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StayDay {
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Full detail dialog for one property
#[derive(Debug, Clone, Serialize)]
pub struct HotelDetail {
    pub item_id: ItemId,
    pub name: String,
    pub hotel_class: Option<String>,
    pub stars: Option<StarRating>,
    pub gallery: ImageGallery,
    pub check_in: StayDay,
    pub check_out: StayDay,
    pub guests_label: String,
    pub nights_label: String,
    pub amenities: Vec<AmenityBadge>,
    pub location: Option<String>,
    pub total_price: String,
    /// `"{rate} × {n} nights"`; absent when the stay length is unknown
    pub price_breakdown: Option<String>,
    #[serde(flatten)]
    pub state: CardState,
    pub action: BookingAction,
}

impl HotelDetail {
    pub fn build(
        property: &HotelProperty,
        item_id: ItemId,
        params: &SearchParameters,
        state: CardState,
    ) -> Self {
        let nights = stay_nights(params);
        let currency = property.currency_code();
        let nights_text = nights_label(nights);
        let price_breakdown = nights.map(|_| {
            format!("{} × {}", format_currency(property.rate_per_night, currency), nights_text)
        });

        Self {
            item_id,
            name: property.name.clone(),
            hotel_class: property.hotel_class.clone().filter(|c| !c.is_empty()),
            stars: StarRating::from_rating(property.overall_rating),
            gallery: ImageGallery::new(property.images()),
            check_in: StayDay {
                date: params.check_in().map(format_stay_date),
                time: property.check_in.clone(),
            },
            check_out: StayDay {
                date: params.check_out().map(format_stay_date),
                time: property.check_out.clone(),
            },
            guests_label: format!("{} Adults", params.adults),
            amenities: property.amenities().iter().map(|a| AmenityBadge::new(a)).collect(),
            location: property
                .coordinates
                .map(|c| format!("{:.4}, {:.4}", c.latitude, c.longitude)),
            total_price: format_currency(property.total_rate, currency),
            price_breakdown,
            nights_label: nights_text,
            state,
            action: BookingAction::from(state),
        }
    }

    /// Detail for the property identified by `item_id`, if it is in the snapshot
    pub fn find(result: &SearchResult, item_id: &ItemId, state: CardState) -> Option<Self> {
        let (_, property) = result.find(item_id)?;
        Some(Self::build(property, item_id.clone(), &result.search_parameters, state))
    }
}
