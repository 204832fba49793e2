//! Crate-wide constants for contentdb.
//!
//! Well-known field names the query helpers key on, the fixed searchable
//! field set, and persistence defaults. These are compile-time constants;
//! there is no runtime configuration surface.

/// Field name checked by the featured-items query (opt-in: absent = not featured).
pub const FEATURED_FIELD: &str = "featured";

/// Field name checked by the published-items query (opt-out: absent = published).
pub const PUBLISHED_FIELD: &str = "published";

/// Field name checked by the category query.
pub const CATEGORY_FIELD: &str = "category";

/// Fixed set of textual fields scanned by substring search.
pub const SEARCHABLE_FIELDS: &[&str] = &[
    "name",
    "title",
    "description",
    "content",
    "category",
    "author",
];

/// Identifier assigned to the first record of an empty collection.
pub const FIRST_RECORD_ID: u64 = 1;

/// Default directory for snapshot files.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// File name of the JSON snapshot inside the data directory.
pub const SNAPSHOT_FILE_NAME: &str = "content.json";
