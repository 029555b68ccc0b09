//! In-process store implementations.
//!
//! These back the test suite and local development runs. They honor the
//! same contracts as the external services: key expiry is enforced by the
//! store itself, and collections preserve insertion order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use serde_json::Value;
use uuid::Uuid;

use super::{DocumentCollection, DocumentStore, KeyValueStore};
use crate::{FilesError, Result};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| FilesError::StorageUnavailable("store lock poisoned".to_string()))
}

/// In-memory key-value store with per-key expiration.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl MemoryKeyValueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn is_alive(&self) -> bool {
        true
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = lock(&self.entries)?;
        let live = match entries.get(key) {
            Some((value, expires_at)) if Instant::now() < *expires_at => Some(value.clone()),
            Some(_) => None,
            None => return Ok(None),
        };
        if live.is_none() {
            // Expired; reap lazily.
            entries.remove(key);
        }
        Ok(live)
    }

    fn set_with_expiry(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let expires_at = Instant::now() + Duration::from_secs(ttl_secs);
        lock(&self.entries)?.insert(key.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        lock(&self.entries)?.remove(key);
        Ok(())
    }
}

/// In-memory document store with insertion-ordered collections.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: Mutex<HashMap<String, Arc<MemoryCollection>>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn is_alive(&self) -> bool {
        true
    }

    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection> {
        let mut collections = match self.collections.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let collection = collections
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemoryCollection::default()));
        let handle: Arc<MemoryCollection> = Arc::clone(collection);
        handle
    }
}

/// A single in-memory collection of JSON documents.
#[derive(Debug, Default)]
pub struct MemoryCollection {
    docs: Mutex<Vec<Value>>,
}

impl DocumentCollection for MemoryCollection {
    fn find_one(&self, filter: &Value) -> Result<Option<Value>> {
        let docs = lock(&self.docs)?;
        Ok(docs.iter().find(|doc| matches_filter(doc, filter)).cloned())
    }

    fn insert_one(&self, doc: Value) -> Result<String> {
        let mut object = match doc {
            Value::Object(map) => map,
            other => {
                return Err(FilesError::StorageUnavailable(format!(
                    "cannot insert non-object document: {other}"
                )))
            }
        };

        let id = match object.get("_id").and_then(Value::as_str) {
            Some(existing) => existing.to_string(),
            None => {
                let id = Uuid::new_v4().simple().to_string();
                object.insert("_id".to_string(), Value::String(id.clone()));
                id
            }
        };

        lock(&self.docs)?.push(Value::Object(object));
        Ok(id)
    }

    fn update_one(&self, filter: &Value, update: &Value) -> Result<bool> {
        let mut docs = lock(&self.docs)?;
        for doc in docs.iter_mut() {
            if matches_filter(doc, filter) {
                apply_set(doc, update)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn find_page(&self, filter: &Value, skip: usize, limit: usize) -> Result<Vec<Value>> {
        let docs = lock(&self.docs)?;
        Ok(docs
            .iter()
            .filter(|doc| matches_filter(doc, filter))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<u64> {
        Ok(lock(&self.docs)?.len() as u64)
    }
}

/// Flat equality match: every filter field must equal the document field.
fn matches_filter(doc: &Value, filter: &Value) -> bool {
    match filter.as_object() {
        Some(fields) => fields.iter().all(|(key, value)| doc.get(key) == Some(value)),
        None => false,
    }
}

/// Apply a `{"$set": {...}}` update to a document in place.
fn apply_set(doc: &mut Value, update: &Value) -> Result<()> {
    let set = update
        .get("$set")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            FilesError::StorageUnavailable(format!("unsupported update shape: {update}"))
        })?;

    let target = doc.as_object_mut().ok_or_else(|| {
        FilesError::StorageUnavailable("cannot update non-object document".to_string())
    })?;

    for (key, value) in set {
        target.insert(key.clone(), value.clone());
    }
    Ok(())
}
