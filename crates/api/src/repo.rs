//! In-memory food table.
//!
//! Ids are assigned from a monotonically increasing counter and never
//! reused, even after deletes. Rows keep insertion order.

use std::path::Path;

use menu_core::error::CoreError;
use menu_core::food::{FoodRecord, NewFood};
use menu_core::types::FoodId;
use serde::Deserialize;
use tokio::sync::RwLock;

/// On-disk seed format: the `foods` collection of a JSON database file.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    foods: Vec<FoodRecord>,
}

struct FoodTable {
    /// `None` once the id space is used up.
    next_id: Option<FoodId>,
    rows: Vec<FoodRecord>,
}

/// Thread-safe food catalog shared by all handlers.
pub struct FoodRepo {
    table: RwLock<FoodTable>,
}

impl Default for FoodRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodRepo {
    /// Create an empty catalog. The first id handed out is `1`.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(FoodTable {
                next_id: Some(1),
                rows: Vec::new(),
            }),
        }
    }

    /// Create a catalog pre-populated with `records`.
    ///
    /// Fails with [`CoreError::Conflict`] if two records share an id.
    pub fn with_records(records: Vec<FoodRecord>) -> Result<Self, CoreError> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id == record.id) {
                return Err(CoreError::Conflict(format!(
                    "Duplicate food id {} in seed data",
                    record.id
                )));
            }
        }

        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        let next_id = max_id.checked_add(1).ok_or_else(|| {
            CoreError::Validation(format!("Seed food id {max_id} is out of range"))
        })?;

        Ok(Self {
            table: RwLock::new(FoodTable {
                next_id: Some(next_id),
                rows: records,
            }),
        })
    }

    /// Load a catalog from a JSON seed file shaped `{ "foods": [...] }`.
    pub fn from_seed_file(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!("Failed to read seed file {}: {e}", path.display()))
        })?;
        let seed: SeedFile = serde_json::from_str(&raw).map_err(|e| {
            CoreError::Validation(format!("Invalid seed file {}: {e}", path.display()))
        })?;
        Self::with_records(seed.foods)
    }

    /// All foods in insertion order.
    pub async fn list(&self) -> Vec<FoodRecord> {
        self.table.read().await.rows.clone()
    }

    /// Number of foods currently stored.
    pub async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn find_by_id(&self, id: FoodId) -> Option<FoodRecord> {
        self.table
            .read()
            .await
            .rows
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Insert a new food, assigning the next id.
    pub async fn create(&self, input: NewFood) -> Result<FoodRecord, CoreError> {
        let mut table = self.table.write().await;
        let id = table
            .next_id
            .ok_or_else(|| CoreError::Conflict("No food ids left to assign".into()))?;
        table.next_id = id.checked_add(1);

        let record = input.into_record(id);
        table.rows.push(record.clone());
        Ok(record)
    }

    /// Replace every field of an existing food. Returns `None` if `id` is unknown.
    pub async fn replace(&self, id: FoodId, input: NewFood) -> Option<FoodRecord> {
        let mut table = self.table.write().await;
        let slot = table.rows.iter_mut().find(|r| r.id == id)?;
        *slot = input.into_record(id);
        Some(slot.clone())
    }

    /// Remove a food. Returns `false` if `id` is unknown.
    pub async fn delete(&self, id: FoodId) -> bool {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|r| r.id != id);
        table.rows.len() != before
    }
}
