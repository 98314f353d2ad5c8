use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use hotelview_core::ItemId;
use hotelview_listing::{CardState, HotelDetail, HotelGrid, SortKey};
use serde::Deserialize;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GridQuery {
    pub sort: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/hotels", get(list_hotels))
        .route("/v1/hotels/{item_id}", get(get_hotel))
}

/// GET /v1/hotels?sort=price|rating|name
async fn list_hotels(
    State(state): State<AppState>,
    Query(query): Query<GridQuery>,
) -> Result<Json<HotelGrid>, AppError> {
    let sort = match query.sort.as_deref() {
        Some(raw) => raw
            .parse::<SortKey>()
            .map_err(|e| AppError::ValidationError(e.to_string()))?,
        None => SortKey::default(),
    };

    let booked = state.booked.snapshot().await;
    let pending = state.controller.pending_ids();

    let grid = HotelGrid::build(&state.snapshot, sort, state.view, |item_id| CardState {
        is_booked: booked.contains(item_id),
        is_booking: pending.contains(item_id),
    });

    Ok(Json(grid))
}

/// GET /v1/hotels/{item_id}
async fn get_hotel(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<HotelDetail>, AppError> {
    let item_id = ItemId::new(raw_id)?;
    let card_state = state.card_state(&item_id).await;

    HotelDetail::find(&state.snapshot, &item_id, card_state)
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("No hotel with id {}", item_id)))
}
