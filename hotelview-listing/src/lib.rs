pub mod sort;
pub mod card;
pub mod view;

pub use sort::{sort_order, sort_properties, SortKey};
pub use card::{AmenityBadge, BookingAction, CardState, HotelCard};
pub use view::{HotelDetail, HotelGrid, ViewOptions};
