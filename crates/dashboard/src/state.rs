use menu_core::food::FoodRecord;

use crate::store::FoodStore;

/// Everything the dashboard view renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub store: FoodStore,
    /// Copy of the record targeted by the edit modal. Not cleared when the
    /// modal closes; the next `begin_edit` overwrites it.
    pub editing_food: Option<FoodRecord>,
    pub add_modal_open: bool,
    pub edit_modal_open: bool,
}
