use async_trait::async_trait;
use std::time::Duration;
use crate::identity::ItemId;
use crate::search::HotelProperty;

/// Category passed to the sink for hotel bookings
pub const HOTEL_CATEGORY: &str = "hotels";

/// Receives successful bookings so the owner can record them
#[async_trait]
pub trait BookingSink: Send + Sync {
    async fn on_booked(
        &self,
        property: &HotelProperty,
        item_id: &ItemId,
        category: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// The step that stands in for a real reservation call
#[async_trait]
pub trait BookingProcessor: Send + Sync {
    async fn process(
        &self,
        property: &HotelProperty,
        item_id: &ItemId,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Waits a fixed delay and reports success
pub struct SimulatedProcessor {
    delay: Duration,
}

impl SimulatedProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedProcessor {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[async_trait]
impl BookingProcessor for SimulatedProcessor {
    async fn process(
        &self,
        property: &HotelProperty,
        item_id: &ItemId,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::debug!("Simulating booking for {} ({}) over {:?}", property.name, item_id, self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
