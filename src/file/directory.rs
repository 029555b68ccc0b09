//! File-record directory backed by the document store.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::store::DocumentCollection;
use crate::{FilesError, Result};

use super::record::{FileKind, FileRecord, NewFileRecord};
use super::{PAGE_SIZE, ROOT_PARENT_ID};

/// Create/lookup/list/mutate file records in the `files` collection.
///
/// Enforces the hierarchy invariant: a non-root parent must be an
/// existing folder record. The parent lookup is deliberately not
/// ownership-scoped; any existing folder id is accepted as parent.
#[derive(Clone)]
pub struct FileDirectory {
    files: Arc<dyn DocumentCollection>,
}

impl FileDirectory {
    /// Create a directory over an injected `files` collection handle.
    pub fn new(files: Arc<dyn DocumentCollection>) -> Self {
        Self { files }
    }

    /// Validate that `parent_id` can act as a parent.
    ///
    /// The root sentinel is always valid. A non-root parent must resolve
    /// to an existing record (`InvalidParent`) of kind folder
    /// (`InvalidParentKind`).
    pub fn ensure_parent(&self, parent_id: &str) -> Result<()> {
        if parent_id == ROOT_PARENT_ID {
            return Ok(());
        }

        let parent = self
            .files
            .find_one(&json!({ "_id": parent_id }))?
            .ok_or(FilesError::InvalidParent)?;

        let kind = parent
            .get("kind")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        if kind != FileKind::Folder.as_str() {
            return Err(FilesError::InvalidParentKind);
        }
        Ok(())
    }

    /// Persist a new record after validating its parent.
    pub fn create(&self, new_record: NewFileRecord) -> Result<FileRecord> {
        self.ensure_parent(&new_record.parent_id)?;

        let doc = serde_json::to_value(&new_record)?;
        let id = self.files.insert_one(doc)?;

        info!(
            file_id = %id,
            owner_id = %new_record.owner_id,
            kind = %new_record.kind,
            parent_id = %new_record.parent_id,
            "File record created"
        );

        Ok(FileRecord {
            id,
            owner_id: new_record.owner_id,
            name: new_record.name,
            kind: new_record.kind,
            parent_id: new_record.parent_id,
            is_public: new_record.is_public,
            storage_locator: new_record.storage_locator,
        })
    }

    /// Look up a record by identifier, regardless of owner.
    pub fn find_by_id(&self, file_id: &str) -> Result<Option<FileRecord>> {
        self.find_with(&json!({ "_id": file_id }))
    }

    /// Look up a record by identifier, scoped to an owner.
    ///
    /// Absent and not-owned are indistinguishable to the caller.
    pub fn find_by_id_owned(&self, file_id: &str, owner_id: &str) -> Result<Option<FileRecord>> {
        self.find_with(&json!({ "_id": file_id, "ownerId": owner_id }))
    }

    /// List an owner's records under a parent, in insertion order,
    /// in fixed pages of [`PAGE_SIZE`].
    ///
    /// `page` is 0-indexed; a page beyond the end yields an empty
    /// sequence, never an error.
    pub fn list_by_parent(
        &self,
        owner_id: &str,
        parent_id: &str,
        page: usize,
    ) -> Result<Vec<FileRecord>> {
        let filter = json!({ "ownerId": owner_id, "parentId": parent_id });
        let docs = self.files.find_page(&filter, page * PAGE_SIZE, PAGE_SIZE)?;

        debug!(
            owner_id = %owner_id,
            parent_id = %parent_id,
            page = page,
            returned = docs.len(),
            "Listed file records"
        );

        docs.into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(Into::into))
            .collect()
    }

    /// Update the visibility flag of a record owned by `owner_id`.
    ///
    /// Returns the post-update record, or `None` when no record with
    /// that id is owned by `owner_id`.
    pub fn set_visibility(
        &self,
        file_id: &str,
        owner_id: &str,
        is_public: bool,
    ) -> Result<Option<FileRecord>> {
        let filter = json!({ "_id": file_id, "ownerId": owner_id });
        let matched = self
            .files
            .update_one(&filter, &json!({ "$set": { "isPublic": is_public } }))?;

        if !matched {
            return Ok(None);
        }

        debug!(file_id = %file_id, is_public = is_public, "File visibility updated");
        self.find_with(&filter)
    }

    /// Number of file records.
    pub fn count(&self) -> Result<u64> {
        self.files.count()
    }

    fn find_with(&self, filter: &serde_json::Value) -> Result<Option<FileRecord>> {
        match self.files.find_one(filter)? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }
}
