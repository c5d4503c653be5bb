//! Creation and edit flows.
//!
//! Both flows close themselves as soon as the form is submitted, before the
//! server has answered. A failed create or update therefore still leaves the
//! flow closed; the failure only reaches the notifier.

use foodboard_core::food::{Food, FoodDraft, FoodEdits};

use super::controller::DashboardController;

/// Form surface collecting a new food.
pub struct CreationFlow<'a> {
    dashboard: &'a DashboardController,
}

impl<'a> CreationFlow<'a> {
    pub(super) fn new(dashboard: &'a DashboardController) -> Self {
        Self { dashboard }
    }

    pub async fn is_open(&self) -> bool {
        self.dashboard.is_create_modal_open().await
    }

    /// Toggles the flow's visibility.
    pub async fn request_close(&self) -> bool {
        self.dashboard.toggle_create_modal().await
    }

    /// Submits the form: closes the flow, then creates the food.
    pub async fn submit(&self, draft: FoodDraft) -> Option<Food> {
        self.request_close().await;
        self.dashboard.create(draft).await
    }
}

/// Form surface editing the selected food.
pub struct EditFlow<'a> {
    dashboard: &'a DashboardController,
}

impl<'a> EditFlow<'a> {
    pub(super) fn new(dashboard: &'a DashboardController) -> Self {
        Self { dashboard }
    }

    pub async fn is_open(&self) -> bool {
        self.dashboard.is_edit_modal_open().await
    }

    /// Toggles the flow's visibility.
    pub async fn request_close(&self) -> bool {
        self.dashboard.toggle_edit_modal().await
    }

    /// Values used to pre-fill the form. This is a copy; the flow never
    /// mutates the selection.
    pub async fn initial_values(&self) -> Option<Food> {
        self.dashboard.editing_food().await
    }

    /// Submits the form: closes the flow, then updates the selected food.
    pub async fn submit(&self, edits: FoodEdits) -> Option<Food> {
        self.request_close().await;
        self.dashboard.update(edits).await
    }
}
