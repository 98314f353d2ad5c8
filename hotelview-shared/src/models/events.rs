use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingConfirmedEvent {
    pub event_id: Uuid,
    pub item_id: String,
    pub property_name: String,
    pub category: String,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingFailedEvent {
    pub event_id: Uuid,
    pub item_id: String,
    pub reason: String,
    pub timestamp: i64,
}

impl BookingConfirmedEvent {
    pub fn new(item_id: &str, property_name: &str, category: &str) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            item_id: item_id.to_string(),
            property_name: property_name.to_string(),
            category: category.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl BookingFailedEvent {
    pub fn new(item_id: &str, reason: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            item_id: item_id.to_string(),
            reason: reason.into(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}
