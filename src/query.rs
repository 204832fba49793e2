//! Query predicates evaluated against record field maps.
//!
//! Pure functions used by the store's read-side helpers: case-insensitive
//! substring search over the fixed searchable field set, and the
//! featured/published/category filters. Featured is opt-in (an absent flag
//! excludes the record) while published is opt-out (an absent flag includes
//! it); the asymmetry is intentional.

use crate::config;
use crate::record::{FieldMap, FieldValue};

/// Case-insensitive substring match of `query` against the string form of
/// the fixed searchable fields. Null and absent fields never match.
pub fn matches_search(fields: &FieldMap, query: &str) -> bool {
    let needle = query.to_lowercase();
    config::SEARCHABLE_FIELDS.iter().any(|&field| {
        fields
            .get(field)
            .and_then(FieldValue::search_text)
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    })
}

/// True only when the `featured` field is exactly `Boolean(true)`.
pub fn is_featured(fields: &FieldMap) -> bool {
    matches!(
        fields.get(config::FEATURED_FIELD),
        Some(FieldValue::Boolean(true))
    )
}

/// True unless the `published` field is explicitly `Boolean(false)`.
pub fn is_published(fields: &FieldMap) -> bool {
    !matches!(
        fields.get(config::PUBLISHED_FIELD),
        Some(FieldValue::Boolean(false))
    )
}

/// Exact match of the `category` field's string form against `category`.
pub fn in_category(fields: &FieldMap, category: &str) -> bool {
    fields
        .get(config::CATEGORY_FIELD)
        .and_then(FieldValue::search_text)
        .is_some_and(|text| text == category)
}
