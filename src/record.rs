//! Core record types for contentdb.
//!
//! A [`Record`] is one entity instance within a collection: a schema-less
//! field map plus a store-assigned integer id and creation/update timestamps.
//! [`FieldValue`] supports text, integer, float, boolean, and null values;
//! date strings and reference ids are carried as `Text`/`Integer`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A schema-less field payload: field name → value.
pub type FieldMap = HashMap<String, FieldValue>;

/// A typed field value attached to a record.
///
/// Untagged serde representation so snapshots read as plain JSON
/// (`"Green Leaf"`, `4.8`, `true`, `null`). Variant order matters for
/// untagged deserialization: integers must be tried before floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit null (distinct from an absent field).
    Null,
    /// Boolean value (`true` / `false`).
    Boolean(bool),
    /// 64-bit signed integer, also used for reference ids.
    Integer(i64),
    /// 64-bit floating-point number.
    Float(f64),
    /// UTF-8 string, also used for date strings.
    Text(String),
}

impl FieldValue {
    /// String form used by substring search and category matching.
    /// `None` for `Null`, which never matches a query.
    pub fn search_text(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Text(s) => Some(s.clone()),
        }
    }
}

/// A stored record with a unique per-collection id and store-managed timestamps.
///
/// Records are the primary unit of storage in a collection. Ids are assigned
/// on creation and never change; `created_at` is set once and `updated_at`
/// refreshes on every merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier within the owning collection.
    pub id: u64,
    /// Arbitrary field payload. Never validated against a schema.
    pub fields: FieldMap,
    /// Creation instant, stamped by the store.
    pub created_at: DateTime<Utc>,
    /// Last-update instant, stamped by the store.
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Creates a record with the given id, stamping both timestamps to now.
    pub fn new(id: u64, fields: FieldMap) -> Self {
        let now = Utc::now();
        Self {
            id,
            fields,
            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow-merges `patch` over the existing fields and refreshes
    /// `updated_at`. Fields absent from the patch are untouched.
    pub fn merge_fields(&mut self, patch: FieldMap) {
        self.fields.extend(patch);
        self.updated_at = Utc::now();
    }
}
