use futures_util::FutureExt;
use hotelview_core::booking::{BookingProcessor, BookingSink};
use hotelview_core::notifier::Notifier;
use hotelview_core::{CoreError, HotelProperty, ItemId};
use hotelview_shared::{BookingConfirmedEvent, BookingFailedEvent, Notification};
use serde::Serialize;
use std::any::Any;
use std::collections::HashSet;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::task::JoinHandle;
use crate::pending::{PendingGuard, PendingStore};

const FAILURE_TITLE: &str = "Booking Failed";
const FAILURE_DESCRIPTION: &str = "There was an error processing your booking. Please try again.";

/// How a settled attempt ended
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingOutcome {
    Confirmed(BookingConfirmedEvent),
    Failed(BookingFailedEvent),
}

impl BookingOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingOutcome::Confirmed(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid item identifier: {0}")]
    InvalidIdentifier(#[from] CoreError),

    #[error("Booking already in progress: {0}")]
    AlreadyPending(String),
}

/// Drives idle → pending → idle for each identifier.
///
/// Failures from the processor or the sink are turned into a destructive
/// notification and a `Failed` outcome; they never propagate further.
/// The pending flag is owned by a [`PendingGuard`], so it is cleared even
/// when the attempt panics or its future is dropped.
pub struct BookingController {
    pending: Arc<PendingStore>,
    processor: Arc<dyn BookingProcessor>,
    notifier: Arc<dyn Notifier>,
    sink: Arc<dyn BookingSink>,
}

impl BookingController {
    pub fn new(
        processor: Arc<dyn BookingProcessor>,
        notifier: Arc<dyn Notifier>,
        sink: Arc<dyn BookingSink>,
    ) -> Self {
        Self {
            pending: Arc::new(PendingStore::new()),
            processor,
            notifier,
            sink,
        }
    }

    pub fn is_pending(&self, item_id: &ItemId) -> bool {
        self.pending.is_pending(item_id)
    }

    pub fn pending_ids(&self) -> HashSet<ItemId> {
        self.pending.pending_ids()
    }

    /// Run one booking attempt to completion on the current task
    pub async fn attempt_booking(
        &self,
        property: &HotelProperty,
        item_id: &ItemId,
        category: &str,
    ) -> Result<BookingOutcome, BookingError> {
        let guard = self.begin(item_id)?;
        Ok(self.settle(guard, property, category).await)
    }

    /// Mark the identifier pending now and finish the attempt on a spawned
    /// task, so it completes even if the caller goes away.
    pub async fn handle_booking(
        self: &Arc<Self>,
        property: HotelProperty,
        item_id: ItemId,
        category: String,
    ) -> Result<JoinHandle<BookingOutcome>, BookingError> {
        let guard = self.begin(&item_id)?;
        let controller = Arc::clone(self);
        Ok(tokio::spawn(async move {
            controller.settle(guard, &property, &category).await
        }))
    }

    fn begin(&self, item_id: &ItemId) -> Result<PendingGuard, BookingError> {
        let Some(guard) = self.pending.begin_guarded(item_id) else {
            tracing::warn!("Ignoring booking for {}: already pending", item_id);
            return Err(BookingError::AlreadyPending(item_id.to_string()));
        };
        tracing::info!("Booking started for {}", item_id);
        Ok(guard)
    }

    async fn settle(&self, guard: PendingGuard, property: &HotelProperty, category: &str) -> BookingOutcome {
        let item_id = &guard.item_id().clone();
        let result = AssertUnwindSafe(self.run(property, item_id, category))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(panic_message(panic.as_ref()).into()));
        drop(guard);

        match result {
            Ok(()) => {
                tracing::info!("Booking confirmed for {} ({})", property.name, item_id);
                BookingOutcome::Confirmed(BookingConfirmedEvent::new(item_id.as_str(), &property.name, category))
            }
            Err(e) => {
                tracing::error!("Booking error for {}: {}", item_id, e);
                self.notifier
                    .notify(Notification::destructive(FAILURE_TITLE, FAILURE_DESCRIPTION))
                    .await;
                BookingOutcome::Failed(BookingFailedEvent::new(item_id.as_str(), e.to_string()))
            }
        }
    }

    async fn run(
        &self,
        property: &HotelProperty,
        item_id: &ItemId,
        category: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.processor.process(property, item_id).await?;

        self.notifier
            .notify(Notification::new(
                "Hotel Booked Successfully! 🏨",
                format!("{} has been reserved for your stay.", property.name),
            ))
            .await;

        self.sink.on_booked(property, item_id, category).await
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("booking panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("booking panicked: {}", message)
    } else {
        "booking panicked".to_string()
    }
}
