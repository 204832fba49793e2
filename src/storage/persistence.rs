//! JSON snapshot persistence for the content store.
//!
//! Snapshots are the on-disk form of [`ContentStore::export_data`]: one
//! pretty-printed JSON file holding every collection. Writes use atomic
//! temp-file + rename to prevent a partially written backup on crash.
//! This is a backup/restore facility, not a database.

use crate::config;
use crate::storage::store::{ContentStore, Snapshot};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Save the full store state to `dir` as a JSON snapshot, creating the
/// directory if needed. Returns the path of the written file.
pub fn save_snapshot(store: &ContentStore, dir: &str) -> io::Result<PathBuf> {
    let snapshot = store.export_data();
    let bytes =
        serde_json::to_vec_pretty(&snapshot).map_err(|e| io::Error::other(e.to_string()))?;

    fs::create_dir_all(dir)?;
    let path = Path::new(dir).join(config::SNAPSHOT_FILE_NAME);
    let tmp_path = path.with_extension("json.tmp");

    // Atomic write: write to temp, then rename.
    fs::write(&tmp_path, &bytes)?;
    fs::rename(&tmp_path, &path)?;

    tracing::info!(
        "Saved snapshot to {:?} ({} collections, {} bytes)",
        path,
        snapshot.len(),
        bytes.len()
    );
    Ok(path)
}

/// Load a JSON snapshot from `path` and replace the store's state with it.
/// Returns the number of records restored.
pub fn load_snapshot(store: &ContentStore, path: &Path) -> io::Result<usize> {
    let bytes = fs::read(path)?;
    let snapshot: Snapshot = serde_json::from_slice(&bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let record_count: usize = snapshot.values().map(Vec::len).sum();
    store.import_data(snapshot);

    tracing::info!("Loaded snapshot from {:?} ({} records)", path, record_count);
    Ok(record_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldMap, FieldValue};

    fn tmp_dir() -> String {
        let id = uuid::Uuid::new_v4();
        let dir = std::env::temp_dir().join(format!("contentdb_test_{id}"));
        dir.to_string_lossy().to_string()
    }

    fn cleanup(dir: &str) {
        let _ = std::fs::remove_dir_all(dir);
    }

    fn one_field(k: &str, v: FieldValue) -> FieldMap {
        let mut m = FieldMap::new();
        m.insert(k.to_string(), v);
        m
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = tmp_dir();
        {
            let store = ContentStore::new();
            store.add_item(
                "dispensaries",
                one_field("name", FieldValue::Text("Green Leaf Dispensary".into())),
            );
            store.add_item("news", one_field("rating", FieldValue::Float(4.8)));
            let path = save_snapshot(&store, &dir).unwrap();

            let restored = ContentStore::new();
            let count = load_snapshot(&restored, &path).unwrap();
            assert_eq!(count, 2);
            assert_eq!(restored.export_data(), store.export_data());
        }
        cleanup(&dir);
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tmp_dir();
        {
            let store = ContentStore::new();
            store.add_item("events", FieldMap::new());
            save_snapshot(&store, &dir).unwrap();
            store.add_item("events", FieldMap::new());
            let path = save_snapshot(&store, &dir).unwrap();

            let restored = ContentStore::new();
            assert_eq!(load_snapshot(&restored, &path).unwrap(), 2);
        }
        cleanup(&dir);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let store = ContentStore::new();
        let path = Path::new("/nonexistent/contentdb/content.json");
        assert!(load_snapshot(&store, path).is_err());
    }

    #[test]
    fn test_load_corrupt_snapshot_fails() {
        let dir = tmp_dir();
        {
            fs::create_dir_all(&dir).unwrap();
            let path = Path::new(&dir).join(config::SNAPSHOT_FILE_NAME);
            fs::write(&path, b"not json").unwrap();
            let store = ContentStore::new();
            let err = load_snapshot(&store, &path).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        }
        cleanup(&dir);
    }
}
