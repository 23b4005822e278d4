//! Persistence gateway: opaque string blobs keyed by name.
//!
//! The record store only needs `get`/`set` by key. Each collection is stored
//! as a JSON array of `GameRecord` under its `CollectionKey`.
//! [`read_collection`] reports a missing key apart from an unreadable or
//! corrupt one; [`load_collection`] folds every failure into an empty list.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gamevault_core::{GameRecord, Ownership};

use crate::error::PersistenceError;

/// Name under which a collection is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Games,
    Wishlist,
}

impl CollectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::Wishlist => "wishlist",
        }
    }

    /// The collection that holds records with this ownership.
    pub fn for_ownership(ownership: Ownership) -> Self {
        match ownership {
            Ownership::Owned => Self::Games,
            Ownership::Wishlist => Self::Wishlist,
        }
    }

    pub fn ownership(&self) -> Ownership {
        match self {
            Self::Games => Ownership::Owned,
            Self::Wishlist => Ownership::Wishlist,
        }
    }
}

impl std::fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key-value storage for serialized blobs.
pub trait BlobStore {
    /// Read the blob stored under `key`, `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the blob stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Serialize `records` and store them under `key`.
pub fn save_collection(
    store: &mut dyn BlobStore,
    key: CollectionKey,
    records: &[GameRecord],
) -> Result<(), PersistenceError> {
    let blob = serde_json::to_string(records).map_err(|e| PersistenceError::Serialize {
        key: key.to_string(),
        source: e,
    })?;
    store.set(key.as_str(), &blob)
}

/// Read the collection stored under `key`.
///
/// `Ok(None)` means the key was never written. A blank blob reads as an
/// empty collection; one that does not parse is `PersistenceError::Corrupt`.
pub fn read_collection(
    store: &dyn BlobStore,
    key: CollectionKey,
) -> Result<Option<Vec<GameRecord>>, PersistenceError> {
    let Some(blob) = store.get(key.as_str())? else {
        return Ok(None);
    };
    if blob.trim().is_empty() {
        return Ok(Some(Vec::new()));
    }
    serde_json::from_str(&blob)
        .map(Some)
        .map_err(|e| PersistenceError::Corrupt {
            key: key.to_string(),
            source: e,
        })
}

/// Load the collection stored under `key`.
///
/// Never fails: absent, unreadable, or corrupt data degrade to an empty
/// collection (logged as a warning).
pub fn load_collection(store: &dyn BlobStore, key: CollectionKey) -> Vec<GameRecord> {
    match read_collection(store, key) {
        Ok(records) => records.unwrap_or_default(),
        Err(e) => {
            log::warn!("Could not load saved {key}, starting with an empty list: {e}");
            Vec::new()
        }
    }
}

/// Key under which [`back_up`] keeps a copy of `key`'s blob.
pub fn backup_key(key: CollectionKey) -> String {
    format!("{key}.corrupt")
}

/// Copy the raw blob under `key` to [`backup_key`], replacing any older
/// copy. Returns `false` when there was nothing to copy.
pub fn back_up(store: &mut dyn BlobStore, key: CollectionKey) -> Result<bool, PersistenceError> {
    match store.get(key.as_str())? {
        Some(blob) => {
            store.set(&backup_key(key), &blob)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

// ── In-memory store ─────────────────────────────────────────────────────────

/// In-process blob store with an optional total size quota.
///
/// The quota models browser-style storage limits: a write that would push
/// the sum of all stored blobs past it fails with `QuotaExceeded` and leaves
/// the previous value in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Total bytes currently stored.
    pub fn used_bytes(&self) -> usize {
        self.entries.values().map(String::len).sum()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if let Some(quota) = self.quota {
            let others = self.used_bytes() - self.entries.get(key).map_or(0, String::len);
            let available = quota.saturating_sub(others);
            if value.len() > available {
                return Err(PersistenceError::QuotaExceeded {
                    key: key.to_string(),
                    size: value.len(),
                    available,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ── File-backed store ───────────────────────────────────────────────────────

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let io_err = |e: io::Error| PersistenceError::Io {
            key: key.to_string(),
            source: e,
        };

        // Write atomically
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/persistence_tests.rs"]
mod tests;
