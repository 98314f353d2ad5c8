use serde::{Deserialize, Serialize};
use std::fmt;
use crate::search::HotelProperty;
use crate::{CoreError, CoreResult};

/// Key used to track booking and pending state for a property.
///
/// The property's link when it has one, otherwise `"{name}-{index}"` where
/// `index` is the property's position in the search snapshot. Snapshot
/// positions never change for a given result, so the fallback survives
/// re-sorting the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: impl Into<String>) -> CoreResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(CoreError::ValidationError("item identifier must not be empty".to_string()));
        }
        Ok(Self(raw))
    }

    pub fn for_property(property: &HotelProperty, snapshot_index: usize) -> Self {
        if property.link.trim().is_empty() {
            Self(format!("{}-{}", property.name, snapshot_index))
        } else {
            Self(property.link.clone())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
