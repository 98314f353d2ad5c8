use std::sync::Arc;
use hotelview_booking::BookingController;
use hotelview_core::booking::BookingProcessor;
use hotelview_core::{ItemId, SearchResult};
use hotelview_listing::{CardState, ViewOptions};
use hotelview_shared::Notification;
use hotelview_store::BookedRegistry;
use tokio::sync::broadcast;
use crate::notifications::BroadcastNotifier;

#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<SearchResult>,
    pub booked: Arc<BookedRegistry>,
    pub controller: Arc<BookingController>,
    pub notifications: broadcast::Sender<Notification>,
    pub view: ViewOptions,
    pub category: String,
}

impl AppState {
    pub fn new(
        snapshot: SearchResult,
        processor: Arc<dyn BookingProcessor>,
        view: ViewOptions,
        category: impl Into<String>,
    ) -> Self {
        let (notifications, _) = broadcast::channel(100);
        let booked = Arc::new(BookedRegistry::new());
        let notifier = Arc::new(BroadcastNotifier::new(notifications.clone()));
        let controller = Arc::new(BookingController::new(processor, notifier, booked.clone()));

        Self {
            snapshot: Arc::new(snapshot),
            booked,
            controller,
            notifications,
            view,
            category: category.into(),
        }
    }

    /// Booked and pending flags for one identifier
    pub async fn card_state(&self, item_id: &ItemId) -> CardState {
        CardState {
            is_booked: self.booked.contains(item_id).await,
            is_booking: self.controller.is_pending(item_id),
        }
    }
}
