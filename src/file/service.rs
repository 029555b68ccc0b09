//! Resource service for files-manager.
//!
//! Orchestrates file creation, retrieval, paginated listing, and
//! publish/unpublish toggling. Every operation resolves the acting
//! identity from the session token first; all request validation
//! precedes any storage side effect.

use tracing::{debug, info};

use crate::auth::AuthService;
use crate::{FilesError, Result};

use super::blob::BlobStore;
use super::directory::FileDirectory;
use super::record::{FileKind, FileRecord, NewFileRecord};
use super::ROOT_PARENT_ID;

/// Upload request as it arrives from the transport layer.
///
/// The transport decodes content from the wire; the kind arrives as an
/// untrusted string and is validated here.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Display name for the record.
    pub name: String,
    /// Requested kind (`folder`, `file`, or `image`).
    pub kind: String,
    /// Parent record identifier; root when absent.
    pub parent_id: Option<String>,
    /// Requested visibility (private by default).
    pub is_public: bool,
    /// Content bytes; required for non-folder kinds.
    pub data: Option<Vec<u8>>,
}

impl UploadRequest {
    /// Create a request with the required fields.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            parent_id: None,
            is_public: false,
            data: None,
        }
    }

    /// Set the parent record.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Set the visibility flag.
    pub fn with_visibility(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Set the content bytes.
    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = Some(data);
        self
    }
}

/// High-level file operations gated by ownership.
#[derive(Clone)]
pub struct ResourceService {
    auth: AuthService,
    files: FileDirectory,
    blobs: BlobStore,
}

impl ResourceService {
    /// Create the service from its injected collaborators.
    pub fn new(auth: AuthService, files: FileDirectory, blobs: BlobStore) -> Self {
        Self { auth, files, blobs }
    }

    /// Create a new record, writing content to the blob store for
    /// non-folder kinds.
    ///
    /// Validation order: identity, name, kind, content presence, parent
    /// hierarchy. Only then are bytes written, and only after a
    /// successful write is metadata persisted; a rejected request leaves
    /// no partial state.
    pub fn upload(&self, token: &str, request: &UploadRequest) -> Result<FileRecord> {
        let user_id = self.auth.identify(token)?;

        if request.name.is_empty() {
            return Err(FilesError::MissingName);
        }

        let kind: FileKind = request
            .kind
            .parse()
            .map_err(|_| FilesError::MissingType)?;

        if kind.has_content() && request.data.is_none() {
            return Err(FilesError::MissingData);
        }

        let parent_id = request.parent_id.as_deref().unwrap_or(ROOT_PARENT_ID);
        self.files.ensure_parent(parent_id)?;

        let mut new_record = NewFileRecord::new(&user_id, &request.name, kind)
            .with_parent(parent_id)
            .with_visibility(request.is_public);

        // Folders never touch the blob store, even if data was sent.
        if kind.has_content() {
            let data = request.data.as_deref().ok_or(FilesError::MissingData)?;
            let locator = self.blobs.store(data)?;
            new_record = new_record.with_locator(locator);
        }

        let record = self.files.create(new_record)?;
        info!(
            user_id = %user_id,
            file_id = %record.id,
            kind = %record.kind,
            "Upload completed"
        );
        Ok(record)
    }

    /// Fetch a record owned by the token's user.
    ///
    /// An absent record and a foreign-owned record are both `NotFound`,
    /// so callers cannot probe for other users' records.
    pub fn show(&self, token: &str, file_id: &str) -> Result<FileRecord> {
        let user_id = self.auth.identify(token)?;
        self.files
            .find_by_id_owned(file_id, &user_id)?
            .ok_or(FilesError::NotFound)
    }

    /// List the token's user's records under a parent, page by page.
    pub fn index(
        &self,
        token: &str,
        parent_id: Option<&str>,
        page: usize,
    ) -> Result<Vec<FileRecord>> {
        let user_id = self.auth.identify(token)?;
        let parent_id = parent_id.unwrap_or(ROOT_PARENT_ID);

        debug!(user_id = %user_id, parent_id = %parent_id, page = page, "Index requested");
        self.files.list_by_parent(&user_id, parent_id, page)
    }

    /// Make a record public.
    pub fn publish(&self, token: &str, file_id: &str) -> Result<FileRecord> {
        self.set_visibility(token, file_id, true)
    }

    /// Make a record private again.
    pub fn unpublish(&self, token: &str, file_id: &str) -> Result<FileRecord> {
        self.set_visibility(token, file_id, false)
    }

    fn set_visibility(&self, token: &str, file_id: &str, is_public: bool) -> Result<FileRecord> {
        let user_id = self.auth.identify(token)?;
        self.files
            .set_visibility(file_id, &user_id, is_public)?
            .ok_or(FilesError::NotFound)
    }

    /// Blob store backing this service.
    pub fn blobs(&self) -> &BlobStore {
        &self.blobs
    }
}
