//! Ordered in-memory food collection.
//!
//! Insertion order is render order. No two records ever share an id.

use menu_core::food::FoodRecord;
use menu_core::types::FoodId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodStore {
    records: Vec<FoodRecord>,
}

impl FoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: FoodId) -> Option<&FoodRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: FoodId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the whole collection, keeping server order.
    ///
    /// If the server returns the same id twice, only the first occurrence
    /// is kept.
    pub fn replace_all(&mut self, records: Vec<FoodRecord>) {
        self.records.clear();
        for record in records {
            if self.contains(record.id) {
                tracing::warn!(id = record.id, "Dropping duplicate food id from catalog");
                continue;
            }
            self.records.push(record);
        }
    }

    /// Add a record at the tail. An id that is already present is replaced
    /// in place instead.
    pub fn append(&mut self, record: FoodRecord) {
        if self.contains(record.id) {
            tracing::warn!(id = record.id, "Created food id already present, replacing");
            self.replace(record);
            return;
        }
        self.records.push(record);
    }

    /// Swap in `record` at the position of the record with the same id.
    ///
    /// Returns `false` (and changes nothing) if the id is not present.
    pub fn replace(&mut self, record: FoodRecord) -> bool {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. Returns `false` if it was not present.
    pub fn remove(&mut self, id: FoodId) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }
}
