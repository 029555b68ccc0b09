//! Backing store interfaces for the files-manager core.
//!
//! The raw key-value and document store clients live outside this crate;
//! every component consumes them through the traits defined here. Store
//! handles are constructed by the caller and injected into each component,
//! never reached through ambient global state.

mod memory;

pub use memory::{MemoryDocumentStore, MemoryKeyValueStore};

use std::sync::Arc;

use serde_json::Value;

use crate::Result;

/// Name of the users collection in the document store.
pub const COLLECTION_USERS: &str = "users";

/// Name of the files collection in the document store.
pub const COLLECTION_FILES: &str = "files";

/// Key-value store client with per-key expiration.
///
/// Used exclusively by the token store, with the `auth_<token>` key
/// pattern. The store itself enforces expiry; callers never check it.
pub trait KeyValueStore: Send + Sync {
    /// Whether the connection to the store is alive.
    fn is_alive(&self) -> bool;

    /// Look up the value for a key. Absent covers missing and expired.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under a key with a time-to-live in seconds.
    fn set_with_expiry(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()>;

    /// Delete a key. Deleting an absent key is a no-op.
    fn delete(&self, key: &str) -> Result<()>;
}

/// Document store client exposing named collections.
pub trait DocumentStore: Send + Sync {
    /// Whether the connection to the store is alive.
    fn is_alive(&self) -> bool;

    /// Handle to a named collection, creating it on first use.
    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection>;
}

/// A single collection of JSON documents.
///
/// Filters are flat objects matched by field equality against the
/// document; updates use the `{"$set": {...}}` shape. This is the subset
/// of the collection contract the system exercises.
pub trait DocumentCollection: Send + Sync {
    /// Find the first document matching the filter.
    fn find_one(&self, filter: &Value) -> Result<Option<Value>>;

    /// Insert a document and return its store-assigned identifier.
    fn insert_one(&self, doc: Value) -> Result<String>;

    /// Apply an update to the first document matching the filter.
    ///
    /// Returns `true` if a document matched.
    fn update_one(&self, filter: &Value, update: &Value) -> Result<bool>;

    /// List documents matching the filter in insertion order, skipping
    /// `skip` matches and returning at most `limit`.
    fn find_page(&self, filter: &Value, skip: usize, limit: usize) -> Result<Vec<Value>>;

    /// Total number of documents in the collection.
    fn count(&self) -> Result<u64>;
}
