//! The content store: collection-scoped CRUD plus read-side query helpers.
//!
//! A [`ContentStore`] maps collection names to ordered record lists and is
//! the stand-in for a future persistent backend. Every operation takes the
//! single `RwLock` once and completes synchronously; the only failure signal
//! is a "not found" sentinel (`None` / `false`), never an error type.

use crate::config;
use crate::query;
use crate::record::{FieldMap, Record};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Deep-copy dump of the full store state: collection name → ordered records.
pub type Snapshot = HashMap<String, Vec<Record>>;

/// A thread-safe in-memory table of named record collections.
///
/// Cloning a `ContentStore` produces a new handle to the same shared data.
/// Construct one explicitly at startup (optionally seeded) and pass it by
/// reference to consumers; there is no ambient global instance.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Record>>>>,
}

impl ContentStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the full ordered record list for `collection`, or an empty
    /// list if the collection is unknown. Never fails.
    pub fn get_collection(&self, collection: &str) -> Vec<Record> {
        self.collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the record with the given id, or `None` if the collection or
    /// the id is unknown.
    pub fn get_item(&self, collection: &str, id: u64) -> Option<Record> {
        self.collections
            .read()
            .get(collection)?
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Assigns the next free id (max existing id + 1, or 1 when the
    /// collection is empty or absent), stamps both timestamps, and appends
    /// the record. Creates the collection on first use. Returns the new
    /// record.
    pub fn add_item(&self, collection: &str, fields: FieldMap) -> Record {
        let mut collections = self.collections.write();
        let records = collections.entry(collection.to_string()).or_default();
        let next_id = records
            .iter()
            .map(|r| r.id)
            .max()
            .map(|max| max + 1)
            .unwrap_or(config::FIRST_RECORD_ID);
        let record = Record::new(next_id, fields);
        records.push(record.clone());
        record
    }

    /// Shallow-merges `patch` over the existing record's fields, preserving
    /// the id and creation timestamp and refreshing the update timestamp.
    /// Returns `None` without side effects when the collection or id is
    /// unknown.
    pub fn update_item(&self, collection: &str, id: u64, patch: FieldMap) -> Option<Record> {
        let mut collections = self.collections.write();
        let record = collections
            .get_mut(collection)?
            .iter_mut()
            .find(|r| r.id == id)?;
        record.merge_fields(patch);
        Some(record.clone())
    }

    /// Removes the matching record entirely (no tombstone). Returns `true`
    /// if a removal occurred.
    pub fn delete_item(&self, collection: &str, id: u64) -> bool {
        let mut collections = self.collections.write();
        match collections.get_mut(collection) {
            Some(records) => {
                let before = records.len();
                records.retain(|r| r.id != id);
                records.len() < before
            }
            None => false,
        }
    }

    /// Records whose `featured` field is exactly `true`.
    pub fn featured_items(&self, collection: &str) -> Vec<Record> {
        self.filtered(collection, query::is_featured)
    }

    /// Case-insensitive substring search over the fixed searchable fields.
    pub fn search_items(&self, collection: &str, search: &str) -> Vec<Record> {
        self.filtered(collection, |fields| query::matches_search(fields, search))
    }

    /// Records whose `category` field exactly matches `category`.
    pub fn items_by_category(&self, collection: &str, category: &str) -> Vec<Record> {
        self.filtered(collection, |fields| query::in_category(fields, category))
    }

    /// Records not explicitly marked `published: false`.
    pub fn published_items(&self, collection: &str) -> Vec<Record> {
        self.filtered(collection, query::is_published)
    }

    /// Deep copy of the full store state, for backup.
    pub fn export_data(&self) -> Snapshot {
        self.collections.read().clone()
    }

    /// Replaces all collections with `snapshot`, for restore.
    pub fn import_data(&self, snapshot: Snapshot) {
        *self.collections.write() = snapshot;
    }

    /// Names of all collections, including empty ones.
    pub fn list_collections(&self) -> Vec<String> {
        self.collections.read().keys().cloned().collect()
    }

    /// Number of records in `collection` (0 if unknown).
    pub fn item_count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Ordered subsequence of a collection matching `predicate`.
    fn filtered(&self, collection: &str, predicate: impl Fn(&FieldMap) -> bool) -> Vec<Record> {
        self.collections
            .read()
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| predicate(&r.fields))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
