//! The dashboard orchestrator.
//!
//! [`Dashboard`] is the single owner of the food store and the modal state.
//! User intents become gateway calls; only confirmed responses mutate the
//! store. The state lock is never held across a gateway call, so several
//! requests can be in flight at once and their results are applied in the
//! order they resolve, not the order they were issued. Nothing de-duplicates
//! or cancels in-flight requests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use menu_core::food::{FoodDraft, FoodRecord};
use menu_core::types::FoodId;
use menu_gateway::{FoodGateway, GatewayError};
use tokio::sync::{broadcast, RwLock};

use crate::events::{DashboardEvent, EVENT_CHANNEL_CAPACITY};
use crate::modals::{AddModal, EditModal};
use crate::state::DashboardState;

pub struct Dashboard {
    gateway: Arc<dyn FoodGateway>,
    state: RwLock<DashboardState>,
    /// Set by the first `initialize` call.
    mounted: AtomicBool,
    event_tx: broadcast::Sender<DashboardEvent>,
}

impl Dashboard {
    /// Create a dashboard with an empty store and both modals closed.
    pub fn new(gateway: Arc<dyn FoodGateway>) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            gateway,
            state: RwLock::new(DashboardState::default()),
            mounted: AtomicBool::new(false),
            event_tx,
        }
    }

    /// Subscribe to state change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.event_tx.subscribe()
    }

    // -----------------------------------------------------------------------
    // Store operations
    // -----------------------------------------------------------------------

    /// Load the catalog on first activation. Later calls do nothing.
    ///
    /// A failed load leaves the store empty and is returned to the caller;
    /// it is not retried.
    pub async fn initialize(&self) -> Result<(), GatewayError> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("Dashboard already initialized");
            return Ok(());
        }
        self.reload().await
    }

    /// Replace the store with a fresh read of the whole catalog.
    pub async fn reload(&self) -> Result<(), GatewayError> {
        let foods = self.gateway.list_foods().await?;

        let count = {
            let mut state = self.state.write().await;
            state.store.replace_all(foods);
            state.store.len()
        };

        tracing::info!(count, "Food catalog loaded");
        self.publish(DashboardEvent::RecordsLoaded { count });
        Ok(())
    }

    /// Create a food from a draft. New foods are always available.
    ///
    /// On success the record is appended and the add modal closed. Failures
    /// are logged and leave the store and the modal untouched.
    pub async fn create_record(&self, draft: FoodDraft) {
        let new_food = draft.into_new_food();

        match self.gateway.create_food(&new_food).await {
            Ok(record) => {
                let id = record.id;
                {
                    let mut state = self.state.write().await;
                    state.store.append(record);
                    state.add_modal_open = false;
                }
                tracing::info!(id, name = %new_food.name, "Food created");
                self.publish(DashboardEvent::RecordCreated { id });
            }
            Err(e) => {
                tracing::error!(error = %e, name = %new_food.name, "Failed to create food");
            }
        }
    }

    /// Update the record being edited with the draft's fields.
    ///
    /// The request body is the edited record with the draft merged over it,
    /// so `available` is carried over. The server's response replaces the
    /// matching record in place. Failures are logged with no mutation.
    pub async fn update_record(&self, draft: FoodDraft) {
        let Some(editing) = self.editing_food().await else {
            tracing::warn!("Update requested with no food being edited");
            return;
        };

        let body = editing.merged_with(&draft);

        match self.gateway.update_food(editing.id, &body).await {
            Ok(updated) => self.apply_update(updated).await,
            Err(e) => {
                tracing::error!(error = %e, id = editing.id, "Failed to update food");
            }
        }
    }

    /// Delete a food. The record leaves the store only after the gateway
    /// confirms; an unknown id leaves the store as it is.
    pub async fn delete_record(&self, id: FoodId) -> Result<(), GatewayError> {
        self.gateway.delete_food(id).await?;

        let removed = self.state.write().await.store.remove(id);
        if removed {
            tracing::info!(id, "Food deleted");
            self.publish(DashboardEvent::RecordDeleted { id });
        } else {
            tracing::debug!(id, "Deleted food was not in the store");
        }
        Ok(())
    }

    /// Flip a food's availability and save the whole record.
    ///
    /// Failures are logged with no mutation.
    pub async fn toggle_availability(&self, id: FoodId) {
        let current = self.state.read().await.store.get(id).cloned();
        let Some(current) = current else {
            tracing::warn!(id, "Cannot toggle availability of unknown food");
            return;
        };

        let body = current.with_availability(!current.available);

        match self.gateway.update_food(id, &body).await {
            Ok(updated) => self.apply_update(updated).await,
            Err(e) => {
                tracing::error!(error = %e, id, "Failed to toggle food availability");
            }
        }
    }

    /// Swap a confirmed update into the store, matched by the returned id.
    /// A record that was removed meanwhile is not brought back.
    async fn apply_update(&self, updated: FoodRecord) {
        let id = updated.id;
        let replaced = self.state.write().await.store.replace(updated);

        if replaced {
            tracing::info!(id, "Food updated");
            self.publish(DashboardEvent::RecordUpdated { id });
        } else {
            tracing::debug!(id, "Updated food is no longer in the store");
        }
    }

    // -----------------------------------------------------------------------
    // Modal state
    // -----------------------------------------------------------------------

    pub async fn open_add_modal(&self) {
        self.change_modals(|state| state.add_modal_open = true).await;
    }

    /// Close the add modal. Closing a closed modal is a no-op.
    pub async fn close_add_modal(&self) {
        self.change_modals(|state| state.add_modal_open = false).await;
    }

    /// Header button behaviour: open if closed, close if open.
    pub async fn toggle_add_modal(&self) {
        self.change_modals(|state| state.add_modal_open = !state.add_modal_open)
            .await;
    }

    /// Target `record` for editing and open the edit modal in one step.
    pub async fn begin_edit(&self, record: FoodRecord) {
        {
            let mut state = self.state.write().await;
            state.editing_food = Some(record);
            state.edit_modal_open = true;
        }
        self.publish(DashboardEvent::ModalsChanged);
    }

    /// Close the edit modal. `editing_food` is kept.
    pub async fn close_edit_modal(&self) {
        self.change_modals(|state| state.edit_modal_open = false).await;
    }

    async fn change_modals<F>(&self, change: F)
    where
        F: FnOnce(&mut DashboardState),
    {
        let changed = {
            let mut state = self.state.write().await;
            let before = (state.add_modal_open, state.edit_modal_open);
            change(&mut state);
            before != (state.add_modal_open, state.edit_modal_open)
        };

        if changed {
            self.publish(DashboardEvent::ModalsChanged);
        }
    }

    // -----------------------------------------------------------------------
    // Read side
    // -----------------------------------------------------------------------

    /// Copy of the full view state.
    pub async fn snapshot(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    pub async fn records(&self) -> Vec<FoodRecord> {
        self.state.read().await.store.records().to_vec()
    }

    pub async fn editing_food(&self) -> Option<FoodRecord> {
        self.state.read().await.editing_food.clone()
    }

    pub async fn is_add_modal_open(&self) -> bool {
        self.state.read().await.add_modal_open
    }

    pub async fn is_edit_modal_open(&self) -> bool {
        self.state.read().await.edit_modal_open
    }

    pub fn add_modal(&self) -> AddModal<'_> {
        AddModal::new(self)
    }

    pub fn edit_modal(&self) -> EditModal<'_> {
        EditModal::new(self)
    }

    fn publish(&self, event: DashboardEvent) {
        // Ignore the SendError; it only means nobody is listening.
        let _ = self.event_tx.send(event);
    }
}
