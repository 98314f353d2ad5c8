pub mod pending;
pub mod controller;

pub use pending::{PendingGuard, PendingStore};
pub use controller::{BookingController, BookingError, BookingOutcome};
pub use hotelview_core::booking::HOTEL_CATEGORY;
