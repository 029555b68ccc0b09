//! Blob storage for files-manager.
//!
//! Raw content bytes live on local disk under a configured root
//! directory, named by a random locator unrelated to the record's
//! user-facing name. Blobs are written once and never mutated or
//! deleted by this system.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::{FilesError, Result};

/// Default storage root when no configuration overrides it.
pub const DEFAULT_STORAGE_ROOT: &str = "/tmp/files_manager";

/// Disk-backed store for raw file content.
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Create a blob store rooted at the given directory.
    ///
    /// The directory is created lazily at the first write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage root of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write content under a fresh random locator and return it.
    ///
    /// Ensures the root directory exists first. Any failure surfaces as
    /// `StorageUnavailable` and must abort the enclosing upload before
    /// metadata referencing the locator is persisted.
    pub fn store(&self, bytes: &[u8]) -> Result<String> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }

        let locator = Uuid::new_v4().to_string();
        fs::write(self.root.join(&locator), bytes)?;

        debug!(locator = %locator, size = bytes.len(), "Blob written");
        Ok(locator)
    }

    /// Read the content stored under a locator.
    pub fn load(&self, locator: &str) -> Result<Vec<u8>> {
        match fs::read(self.root.join(locator)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FilesError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether a blob exists under the locator.
    pub fn exists(&self, locator: &str) -> bool {
        self.root.join(locator).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, BlobStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = BlobStore::new(temp_dir.path().join("blobs"));
        (temp_dir, store)
    }

    #[test]
    fn test_store_creates_root_lazily() {
        let (_temp_dir, store) = setup();
        assert!(!store.root().exists());

        store.store(b"hello").unwrap();
        assert!(store.root().exists());
    }

    #[test]
    fn test_store_and_load_round_trip() {
        let (_temp_dir, store) = setup();

        let locator = store.store(b"hello").unwrap();
        assert_eq!(store.load(&locator).unwrap(), b"hello");
    }

    #[test]
    fn test_locators_are_unique() {
        let (_temp_dir, store) = setup();

        let first = store.store(b"same bytes").unwrap();
        let second = store.store(b"same bytes").unwrap();

        assert_ne!(first, second);
        assert!(store.exists(&first));
        assert!(store.exists(&second));
    }

    #[test]
    fn test_locator_is_not_the_display_name() {
        let (_temp_dir, store) = setup();

        let locator = store.store(b"content of report.pdf").unwrap();
        assert!(!locator.contains("report"));
        assert!(!locator.contains('.'));
    }

    #[test]
    fn test_load_unknown_locator() {
        let (_temp_dir, store) = setup();
        store.store(b"something").unwrap();

        let result = store.load("no-such-locator");
        assert!(matches!(result, Err(FilesError::NotFound)));
    }

    #[test]
    fn test_binary_content() {
        let (_temp_dir, store) = setup();
        let content: Vec<u8> = (0..=255).collect();

        let locator = store.store(&content).unwrap();
        assert_eq!(store.load(&locator).unwrap(), content);
    }

    #[test]
    fn test_empty_content() {
        let (_temp_dir, store) = setup();

        let locator = store.store(b"").unwrap();
        assert!(store.load(&locator).unwrap().is_empty());
    }

    #[test]
    fn test_unwritable_root_is_storage_unavailable() {
        let store = BlobStore::new("/proc/files_manager_test");

        let result = store.store(b"data");
        assert!(matches!(result, Err(FilesError::StorageUnavailable(_))));
    }
}
