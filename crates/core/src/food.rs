//! Food catalog records and drafts.
//!
//! A [`FoodRecord`] is what the server knows about. A [`FoodDraft`] is the
//! uncommitted form payload produced by the add and edit forms; it carries
//! neither an id nor an availability flag.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::FoodId;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A persisted food item as returned by the `/foods` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    /// Decimal-looking text such as `"19.90"`. Never parsed client-side.
    pub price: String,
    pub available: bool,
    /// Image URL.
    pub image: String,
}

impl FoodRecord {
    /// Shallow-merge a draft over this record.
    ///
    /// Draft fields replace the record's fields of the same name; `id` and
    /// `available` are carried over untouched. The result is the full body
    /// sent when updating the record.
    pub fn merged_with(&self, draft: &FoodDraft) -> FoodRecord {
        FoodRecord {
            id: self.id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price.clone(),
            available: self.available,
            image: draft.image.clone(),
        }
    }

    /// Copy of this record with the availability flag replaced.
    pub fn with_availability(&self, available: bool) -> FoodRecord {
        FoodRecord {
            available,
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Form payload for creating or editing a food item.
///
/// `Default` is the empty form shown when adding a new item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl FoodDraft {
    /// Turn the draft into a create request body. New items are always
    /// created as available.
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

/// Prefill an edit form from an existing record.
impl From<&FoodRecord> for FoodDraft {
    fn from(record: &FoodRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price.clone(),
            image: record.image.clone(),
        }
    }
}

/// Body of a `POST /foods` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub available: bool,
}

impl NewFood {
    /// Attach a server-assigned id, producing the persisted record.
    pub fn into_record(self, id: FoodId) -> FoodRecord {
        FoodRecord {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            available: self.available,
            image: self.image,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject blank names and prices.
///
/// Only the development server validates; the client forwards whatever the
/// form produced.
pub fn validate_food_fields(name: &str, price: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Food name must not be blank".into()));
    }
    if price.trim().is_empty() {
        return Err(CoreError::Validation("Food price must not be blank".into()));
    }
    Ok(())
}
