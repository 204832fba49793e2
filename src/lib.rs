//! # contentdb
//!
//! Embeddable in-memory content store for CMS-style collections: named,
//! ordered lists of schema-less records with CRUD, substring search, and
//! featured/category/published query helpers, plus JSON snapshot backup
//! and restore.
//!
//! The store is a deliberate stand-in for a persistent database backend.
//! Its operation surface (names, parameter types, return shapes) is meant
//! to survive a swap to a real datastore unchanged, so callers never see
//! anything richer than a "not found" sentinel.

/// Crate-wide constants: well-known field names and persistence defaults.
pub mod config;
/// Query predicates evaluated against record field maps.
pub mod query;
/// Core record types: `Record` struct and `FieldValue` enum.
pub mod record;
/// Declarative collection schemas (descriptive metadata, never enforced).
pub mod schema;
/// Storage layer: the content store, JSON snapshots, and demo seeding.
pub mod storage;
