pub mod search;
pub mod identity;
pub mod notifier;
pub mod booking;

pub use identity::ItemId;
pub use search::{Coordinates, HotelProperty, SearchParameters, SearchResult};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Malformed search result: {0}")]
    MalformedSnapshot(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
