use async_trait::async_trait;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use hotelview_core::notifier::Notifier;
use hotelview_shared::Notification;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use crate::state::AppState;

/// Fans notifications out to every connected SSE client
pub struct BroadcastNotifier {
    tx: broadcast::Sender<Notification>,
}

impl BroadcastNotifier {
    pub fn new(tx: broadcast::Sender<Notification>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl Notifier for BroadcastNotifier {
    async fn notify(&self, notification: Notification) {
        tracing::info!("Notification: {} - {}", notification.title, notification.description);
        // No subscribers is fine, the toast is simply not shown
        let _ = self.tx.send(notification);
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/notifications/stream", get(stream_notifications))
}

/// GET /v1/notifications/stream
async fn stream_notifications(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let rx = state.notifications.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|result| {
        result
            .ok()
            .map(|notification| Event::default().event("notification").json_data(notification))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
