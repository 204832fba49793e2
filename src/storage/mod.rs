//! Storage layer: the content store, JSON snapshots, and demo seeding.
//!
//! Data lives in-memory in a [`ContentStore`] guarded by a single
//! `parking_lot::RwLock`. Backup/restore is provided by JSON snapshots
//! written with atomic temp-file + rename.

/// JSON snapshot save/load with atomic writes.
pub mod persistence;
/// Demo content: sample dispensaries, events, and news articles.
pub mod seed;
/// The content store: collection-scoped CRUD and query helpers.
pub mod store;

pub use persistence::{load_snapshot, save_snapshot};
pub use seed::seed_demo_content;
pub use store::{ContentStore, Snapshot};
