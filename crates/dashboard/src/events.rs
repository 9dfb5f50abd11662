//! Change notifications published by the [`Dashboard`](crate::Dashboard).
//!
//! Every committed state transition publishes exactly one event; a view
//! re-renders when it receives one.

use menu_core::types::FoodId;

/// Broadcast channel capacity for dashboard events.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// The store was replaced by a full read of the catalog.
    RecordsLoaded { count: usize },
    /// A confirmed create was appended to the store.
    RecordCreated { id: FoodId },
    /// A confirmed update replaced a record in place.
    RecordUpdated { id: FoodId },
    /// A confirmed delete removed a record.
    RecordDeleted { id: FoodId },
    /// A modal opened or closed, or the edit target changed.
    ModalsChanged,
}

impl DashboardEvent {
    /// Whether the food list needs to be redrawn.
    pub fn touches_records(&self) -> bool {
        !matches!(self, DashboardEvent::ModalsChanged)
    }
}
