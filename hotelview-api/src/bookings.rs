use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use hotelview_core::ItemId;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub item_id: String,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub item_id: ItemId,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BookingsSummary {
    pub booked: Vec<ItemId>,
    pub pending: Vec<ItemId>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/bookings", post(create_booking).get(list_bookings))
}

/// POST /v1/bookings
/// Starts a booking and returns while it is still pending
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let item_id = ItemId::new(req.item_id)?;

    let (_, property) = state
        .snapshot
        .find(&item_id)
        .ok_or_else(|| AppError::NotFoundError(format!("No hotel with id {}", item_id)))?;

    // The view disables the button for booked items, enforce the same here
    if state.booked.contains(&item_id).await {
        return Err(AppError::ConflictError(format!("{} is already booked", property.name)));
    }

    let category = req.category.unwrap_or_else(|| state.category.clone());
    let handle = state
        .controller
        .handle_booking(property.clone(), item_id.clone(), category)
        .await?;

    let logged_id = item_id.clone();
    tokio::spawn(async move {
        match handle.await {
            Ok(outcome) => info!("Booking for {} settled: confirmed={}", logged_id, outcome.is_confirmed()),
            Err(e) => tracing::error!("Booking task for {} aborted: {}", logged_id, e),
        }
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(BookingResponse {
            item_id,
            status: "PENDING",
        }),
    ))
}

/// GET /v1/bookings
async fn list_bookings(State(state): State<AppState>) -> Json<BookingsSummary> {
    let mut booked: Vec<ItemId> = state.booked.snapshot().await.into_iter().collect();
    let mut pending: Vec<ItemId> = state.controller.pending_ids().into_iter().collect();
    booked.sort();
    pending.sort();

    Json(BookingsSummary { booked, pending })
}
