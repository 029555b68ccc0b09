//! File management module for files-manager.
//!
//! Provides the hierarchical file-record directory, disk-backed blob
//! storage, and the resource service orchestrating upload, retrieval,
//! listing, and visibility toggling.

mod blob;
mod directory;
mod record;
mod service;

pub use blob::{BlobStore, DEFAULT_STORAGE_ROOT};
pub use directory::FileDirectory;
pub use record::{FileKind, FileRecord, NewFileRecord};
pub use service::{ResourceService, UploadRequest};

/// Parent identifier sentinel for top-level records.
pub const ROOT_PARENT_ID: &str = "0";

/// Fixed page size for listings.
pub const PAGE_SIZE: usize = 20;
