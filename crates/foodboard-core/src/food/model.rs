//! Food domain models.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a food record.
pub type FoodId = i64;

/// A menu item as acknowledged by the food collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    /// Image URL.
    pub image: String,
}

impl Food {
    /// Returns the shallow merge of this record and `edits`.
    ///
    /// Fields present in `edits` win; the `id` is always kept.
    pub fn merged_with(&self, edits: &FoodEdits) -> Food {
        Food {
            id: self.id,
            name: edits.name.clone().unwrap_or_else(|| self.name.clone()),
            description: edits
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            price: edits.price.unwrap_or(self.price),
            available: edits.available.unwrap_or(self.available),
            image: edits.image.clone().unwrap_or_else(|| self.image.clone()),
        }
    }
}

/// Fields collected by the creation form.
///
/// Carries neither an `id` (assigned by the server) nor `available`
/// (set when the create request is built).
#[derive(Debug, Clone, PartialEq)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

impl FoodDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
        }
    }

    /// Builds the create request body, marking the new food as available.
    pub fn into_new_food(self) -> NewFood {
        NewFood {
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            available: true,
        }
    }
}

/// Body of `POST /foods`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub available: bool,
}

/// Partial record collected by the edit form.
///
/// Never sent as is; it is merged into the selected record first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodEdits {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
    pub image: Option<String>,
}

impl FoodEdits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns true if no field was edited.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.available.is_none()
            && self.image.is_none()
    }
}
