use async_trait::async_trait;
use hotelview_core::booking::BookingSink;
use hotelview_core::{HotelProperty, ItemId};
use std::collections::HashSet;
use tokio::sync::RwLock;

/// The owner's set of booked identifiers, kept in memory only
#[derive(Default)]
pub struct BookedRegistry {
    booked: RwLock<HashSet<ItemId>>,
}

impl BookedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contains(&self, item_id: &ItemId) -> bool {
        self.booked.read().await.contains(item_id)
    }

    pub async fn snapshot(&self) -> HashSet<ItemId> {
        self.booked.read().await.clone()
    }
}

#[async_trait]
impl BookingSink for BookedRegistry {
    async fn on_booked(
        &self,
        property: &HotelProperty,
        item_id: &ItemId,
        category: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let inserted = self.booked.write().await.insert(item_id.clone());
        if inserted {
            tracing::info!("Recorded {} booking for {} ({})", category, property.name, item_id);
        }
        Ok(())
    }
}
