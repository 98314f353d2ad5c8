use hotelview_core::ItemId;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

/// Identifier → "booking in progress" flag.
///
/// Entries appear on the first attempt for an identifier and are reset to
/// `false` when the attempt settles; they are never removed. The lock is a
/// plain mutex so the flag can be cleared from `Drop`.
#[derive(Default)]
pub struct PendingStore {
    flags: Mutex<HashMap<ItemId, bool>>,
}

impl PendingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn flags(&self) -> MutexGuard<'_, HashMap<ItemId, bool>> {
        // A panic elsewhere never leaves the map half-written, so keep going.
        self.flags.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Mark `item_id` pending unless it already is. Returns whether the
    /// caller now owns the attempt.
    pub fn try_begin(&self, item_id: &ItemId) -> bool {
        let mut flags = self.flags();
        let flag = flags.entry(item_id.clone()).or_insert(false);
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    /// Like `try_begin`, but hands back a guard that clears the flag when
    /// dropped, including on panic or when the owning future is cancelled.
    pub fn begin_guarded(self: &Arc<Self>, item_id: &ItemId) -> Option<PendingGuard> {
        self.try_begin(item_id).then(|| PendingGuard {
            store: Arc::clone(self),
            item_id: item_id.clone(),
        })
    }

    pub fn finish(&self, item_id: &ItemId) {
        self.set(item_id, false);
    }

    pub fn set(&self, item_id: &ItemId, pending: bool) {
        self.flags().insert(item_id.clone(), pending);
    }

    pub fn is_pending(&self, item_id: &ItemId) -> bool {
        self.flags().get(item_id).copied().unwrap_or(false)
    }

    pub fn pending_ids(&self) -> HashSet<ItemId> {
        self.flags()
            .iter()
            .filter(|(_, pending)| **pending)
            .map(|(id, _)| id.clone())
            .collect()
    }
}

/// Owns one pending attempt; the flag goes back to `false` on drop.
#[must_use = "dropping the guard ends the pending attempt"]
pub struct PendingGuard {
    store: Arc<PendingStore>,
    item_id: ItemId,
}

impl PendingGuard {
    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.store.finish(&self.item_id);
    }
}
