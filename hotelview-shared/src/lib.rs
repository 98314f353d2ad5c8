pub mod models;

pub use models::events::{BookingConfirmedEvent, BookingFailedEvent};
pub use models::notification::{Notification, NotificationVariant};
