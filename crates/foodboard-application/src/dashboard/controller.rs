use std::sync::Arc;

use foodboard_core::food::{Food, FoodDraft, FoodEdits, FoodGateway, FoodId};
use foodboard_core::{ErrorNotifier, FoodboardError, RecordStore, Result};
use tokio::sync::RwLock;

use super::flows::{CreationFlow, EditFlow};

/// Everything the dashboard view renders from.
#[derive(Debug, Default)]
struct DashboardState {
    /// Acknowledged records in display order.
    foods: RecordStore,
    /// Record currently selected for editing.
    editing_food: Option<Food>,
    create_modal_open: bool,
    edit_modal_open: bool,
}

/// Keeps the local food list in sync with the remote collection.
///
/// `DashboardController` is responsible for:
/// - Loading the collection on activation
/// - Sequencing create/update/delete requests against the gateway
/// - Reconciling the [`RecordStore`] with each response
/// - Owning the edit selection and the modal flags
///
/// Operations take `&self` and may run concurrently. The state lock is never
/// held while a request is in flight, so each operation mutates state only
/// after its own response arrives and the last completion wins.
pub struct DashboardController {
    state: Arc<RwLock<DashboardState>>,
    gateway: Arc<dyn FoodGateway>,
    notifier: Arc<dyn ErrorNotifier>,
}

impl DashboardController {
    /// Creates a controller with an empty store and both modals closed.
    ///
    /// # Arguments
    ///
    /// * `gateway` - Access to the remote food collection
    /// * `notifier` - Sink for create/update failures
    pub fn new(gateway: Arc<dyn FoodGateway>, notifier: Arc<dyn ErrorNotifier>) -> Self {
        Self {
            state: Arc::new(RwLock::new(DashboardState::default())),
            gateway,
            notifier,
        }
    }

    /// Fetches the whole collection and replaces the store with it.
    ///
    /// # Errors
    ///
    /// Returns the gateway error unchanged. The store is left as it was and
    /// the notifier is not called.
    pub async fn load(&self) -> Result<()> {
        let foods = self.gateway.list().await?;

        tracing::info!("[Dashboard] Loaded {} foods", foods.len());
        self.state.write().await.foods.replace_all(foods);
        Ok(())
    }

    /// Creates a food from `draft`, marking it available.
    ///
    /// Only the server's response is appended to the store. If a load that
    /// finished meanwhile already brought the record in, it is replaced in
    /// place rather than added twice. A failure is reported to the notifier
    /// and leaves the store unchanged.
    ///
    /// # Returns
    ///
    /// The created record, or `None` when the request failed.
    pub async fn create(&self, draft: FoodDraft) -> Option<Food> {
        let new_food = draft.into_new_food();

        match self.gateway.create(&new_food).await {
            Ok(created) => {
                tracing::info!("[Dashboard] Created food {} ({})", created.id, created.name);
                self.state.write().await.foods.append(created.clone());
                Some(created)
            }
            Err(e) => {
                self.notifier.notify("create", &e);
                None
            }
        }
    }

    /// Selects a record for editing and opens the edit flow.
    ///
    /// The record is resolved by id against the current store, so a stale
    /// copy from the caller never becomes the selection.
    ///
    /// # Errors
    ///
    /// Returns [`FoodboardError::NotFound`] if no stored record has that id;
    /// the selection and the edit flag are left untouched.
    pub async fn select_for_edit(&self, food: &Food) -> Result<Food> {
        let mut state = self.state.write().await;

        let selected = state
            .foods
            .find(food.id)
            .cloned()
            .ok_or_else(|| FoodboardError::not_found("food", food.id))?;

        tracing::debug!("[Dashboard] Selected food {} for editing", selected.id);
        state.editing_food = Some(selected.clone());
        state.edit_modal_open = true;
        Ok(selected)
    }

    /// Applies `edits` to the selected record on the server.
    ///
    /// The request body is the selected record merged with `edits`, sent to
    /// the selected record's id. On success the stored record with the
    /// response's id is replaced in place. Failures, including a missing
    /// selection, are reported to the notifier and leave the store unchanged.
    ///
    /// # Returns
    ///
    /// The updated record, or `None` when the update did not happen.
    pub async fn update(&self, edits: FoodEdits) -> Option<Food> {
        let Some(selected) = self.state.read().await.editing_food.clone() else {
            self.notifier.notify("update", &FoodboardError::NoSelection);
            return None;
        };

        let payload = selected.merged_with(&edits);

        match self.gateway.update(selected.id, &payload).await {
            Ok(updated) => {
                let replaced = self.state.write().await.foods.replace_by_id(updated.clone());
                if !replaced {
                    tracing::warn!(
                        "[Dashboard] Updated food {} is no longer in the list",
                        updated.id
                    );
                }
                Some(updated)
            }
            Err(e) => {
                tracing::debug!("[Dashboard] Error updating food {}", selected.id);
                self.notifier.notify("update", &e);
                None
            }
        }
    }

    /// Deletes a food on the server, then removes it from the store.
    ///
    /// Removing an id that is not stored is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the gateway error; the store is unchanged in that case.
    pub async fn delete(&self, id: FoodId) -> Result<()> {
        self.gateway.delete(id).await?;

        if self.state.write().await.foods.remove_by_id(id) {
            tracing::info!("[Dashboard] Deleted food {}", id);
        } else {
            tracing::debug!("[Dashboard] Deleted food {} was not in the list", id);
        }
        Ok(())
    }

    /// Flips the creation flow's visibility and returns the new value.
    pub async fn toggle_create_modal(&self) -> bool {
        let mut state = self.state.write().await;
        state.create_modal_open = !state.create_modal_open;
        state.create_modal_open
    }

    /// Flips the edit flow's visibility and returns the new value.
    pub async fn toggle_edit_modal(&self) -> bool {
        let mut state = self.state.write().await;
        state.edit_modal_open = !state.edit_modal_open;
        state.edit_modal_open
    }

    /// Returns the records in display order.
    pub async fn foods(&self) -> Vec<Food> {
        self.state.read().await.foods.as_slice().to_vec()
    }

    pub async fn editing_food(&self) -> Option<Food> {
        self.state.read().await.editing_food.clone()
    }

    pub async fn is_create_modal_open(&self) -> bool {
        self.state.read().await.create_modal_open
    }

    pub async fn is_edit_modal_open(&self) -> bool {
        self.state.read().await.edit_modal_open
    }

    /// Returns the creation flow bound to this dashboard.
    pub fn creation_flow(&self) -> CreationFlow<'_> {
        CreationFlow::new(self)
    }

    /// Returns the edit flow bound to this dashboard.
    pub fn edit_flow(&self) -> EditFlow<'_> {
        EditFlow::new(self)
    }
}
