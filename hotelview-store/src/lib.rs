pub mod app_config;
pub mod booked;
pub mod snapshot;

pub use booked::BookedRegistry;
pub use snapshot::{load_snapshot, SnapshotError};
