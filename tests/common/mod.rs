//! Shared harness for integration tests.
//!
//! Wires every service over the in-process stores and a temporary blob
//! root, the same way the surrounding application composes them over
//! the external stores.

use std::sync::Arc;

use tempfile::TempDir;

use files_manager::{
    AuthService, BlobStore, DocumentStore, FileDirectory, MemoryDocumentStore,
    MemoryKeyValueStore, ResourceService, StatusService, TokenStore, UserDirectory,
    COLLECTION_FILES, COLLECTION_USERS,
};

/// Fully wired backend over in-process stores.
pub struct TestBackend {
    _temp_dir: TempDir,
    pub users: UserDirectory,
    pub files: FileDirectory,
    pub auth: AuthService,
    pub resources: ResourceService,
    pub status: StatusService,
}

impl TestBackend {
    /// Construct a fresh backend with empty stores.
    pub fn new() -> Self {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let docs = Arc::new(MemoryDocumentStore::new());
        let temp_dir = TempDir::new().expect("temp dir");

        let users = UserDirectory::new(docs.collection(COLLECTION_USERS));
        let files = FileDirectory::new(docs.collection(COLLECTION_FILES));
        let blobs = BlobStore::new(temp_dir.path().join("blobs"));
        let auth = AuthService::new(TokenStore::new(kv.clone()), users.clone());
        let resources = ResourceService::new(auth.clone(), files.clone(), blobs);
        let status = StatusService::new(kv, docs, users.clone(), files.clone());

        Self {
            _temp_dir: temp_dir,
            users,
            files,
            auth,
            resources,
            status,
        }
    }

    /// Register an account and sign it in, returning the session token.
    pub fn register_and_sign_in(&self, email: &str, password: &str) -> String {
        self.users.register(email, password).expect("register");
        self.auth.authenticate(email, password).expect("authenticate")
    }
}
