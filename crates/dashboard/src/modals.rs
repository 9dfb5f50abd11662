//! Add and edit modal contracts.
//!
//! Both modals submit through the [`Dashboard`] and then close themselves
//! without looking at the outcome. A failed create or update therefore
//! still closes the modal; the failure only shows up in the log and the
//! list simply does not change.

use menu_core::food::FoodDraft;

use crate::orchestrator::Dashboard;

/// The "new food" form.
pub struct AddModal<'a> {
    dashboard: &'a Dashboard,
}

impl<'a> AddModal<'a> {
    pub(crate) fn new(dashboard: &'a Dashboard) -> Self {
        Self { dashboard }
    }

    pub async fn is_open(&self) -> bool {
        self.dashboard.is_add_modal_open().await
    }

    /// The form starts empty.
    pub fn initial_form(&self) -> FoodDraft {
        FoodDraft::default()
    }

    /// Create the food, then close regardless of the result.
    pub async fn submit(&self, draft: FoodDraft) {
        self.dashboard.create_record(draft).await;
        self.dashboard.close_add_modal().await;
    }
}

/// The "edit food" form.
pub struct EditModal<'a> {
    dashboard: &'a Dashboard,
}

impl<'a> EditModal<'a> {
    pub(crate) fn new(dashboard: &'a Dashboard) -> Self {
        Self { dashboard }
    }

    pub async fn is_open(&self) -> bool {
        self.dashboard.is_edit_modal_open().await
    }

    /// Fields prefilled from the record being edited, or `None` if nothing
    /// has been selected yet.
    pub async fn initial_form(&self) -> Option<FoodDraft> {
        self.dashboard
            .editing_food()
            .await
            .map(|record| FoodDraft::from(&record))
    }

    /// Update the food, then close regardless of the result.
    pub async fn submit(&self, draft: FoodDraft) {
        self.dashboard.update_record(draft).await;
        self.dashboard.close_edit_modal().await;
    }
}
