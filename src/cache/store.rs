//! Versioned on-disk bucket store for cached responses.
//!
//! One directory per version tag under the store root; each entry is a body
//! file plus a JSON metadata record, keyed by the SHA-256 of the resolved
//! absolute URL.

use std::fs;
use std::path::PathBuf;

use ring::digest;

use crate::types::cache::{CachedEntry, EntryMeta};
use crate::types::errors::CacheError;

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Filename-safe key for a cached URL.
fn entry_key(url: &str) -> String {
    hex_encode(digest::digest(&digest::SHA256, url.as_bytes()).as_ref())
}

/// Disk-backed store of named cache buckets.
pub struct BucketStore {
    root: PathBuf,
}

impl BucketStore {
    /// Creates a store rooted at `root` (created lazily on first write).
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn bucket_dir(&self, version: &str) -> PathBuf {
        self.root.join(version)
    }

    /// Stores an entry in the bucket named `version`, replacing any
    /// previous entry for the same URL.
    pub fn put(&self, version: &str, entry: &CachedEntry) -> Result<(), CacheError> {
        let dir = self.bucket_dir(version);
        fs::create_dir_all(&dir).map_err(|e| CacheError::StoreError(e.to_string()))?;

        let key = entry_key(&entry.meta.url);
        let meta = serde_json::to_string(&entry.meta)
            .map_err(|e| CacheError::SerializationError(e.to_string()))?;
        fs::write(dir.join(format!("{}.json", key)), meta)
            .map_err(|e| CacheError::StoreError(e.to_string()))?;
        fs::write(dir.join(format!("{}.body", key)), &entry.body)
            .map_err(|e| CacheError::StoreError(e.to_string()))?;
        Ok(())
    }

    /// Looks up the cached entry for `url` in the bucket named `version`.
    pub fn get(&self, version: &str, url: &str) -> Result<Option<CachedEntry>, CacheError> {
        let dir = self.bucket_dir(version);
        let key = entry_key(url);
        let meta_path = dir.join(format!("{}.json", key));
        if !meta_path.exists() {
            return Ok(None);
        }

        let meta_blob =
            fs::read_to_string(&meta_path).map_err(|e| CacheError::StoreError(e.to_string()))?;
        let meta: EntryMeta = serde_json::from_str(&meta_blob)
            .map_err(|e| CacheError::SerializationError(e.to_string()))?;
        let body = fs::read(dir.join(format!("{}.body", key)))
            .map_err(|e| CacheError::StoreError(e.to_string()))?;
        Ok(Some(CachedEntry { meta, body }))
    }

    /// Names of all existing buckets.
    pub fn list_buckets(&self) -> Result<Vec<String>, CacheError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut buckets = Vec::new();
        let entries =
            fs::read_dir(&self.root).map_err(|e| CacheError::StoreError(e.to_string()))?;
        for entry in entries {
            let entry = entry.map_err(|e| CacheError::StoreError(e.to_string()))?;
            if entry.path().is_dir() {
                buckets.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        buckets.sort();
        Ok(buckets)
    }

    /// Deletes the bucket named `version` (no-op if absent).
    pub fn delete_bucket(&self, version: &str) -> Result<(), CacheError> {
        let dir = self.bucket_dir(version);
        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|e| CacheError::StoreError(e.to_string()))?;
        }
        Ok(())
    }

    /// Number of entries in the bucket named `version`.
    pub fn entry_count(&self, version: &str) -> Result<usize, CacheError> {
        let dir = self.bucket_dir(version);
        if !dir.exists() {
            return Ok(0);
        }
        let entries = fs::read_dir(&dir).map_err(|e| CacheError::StoreError(e.to_string()))?;
        let mut count = 0;
        for entry in entries {
            let entry = entry.map_err(|e| CacheError::StoreError(e.to_string()))?;
            if entry.path().extension().map(|e| e == "json").unwrap_or(false) {
                count += 1;
            }
        }
        Ok(count)
    }
}
