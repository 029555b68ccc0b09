//! Store liveness and usage counters.
//!
//! Read-through over the injected store handles and directories, exposed
//! to the transport layer's status/stats endpoints.

use std::sync::Arc;

use serde::Serialize;

use crate::file::FileDirectory;
use crate::store::{DocumentStore, KeyValueStore};
use crate::user::UserDirectory;
use crate::Result;

/// Liveness of both backing stores.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthStatus {
    /// Key-value store connection is alive.
    pub kv: bool,
    /// Document store connection is alive.
    pub db: bool,
}

/// Document counts per collection.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UsageStats {
    /// Number of registered users.
    pub users: u64,
    /// Number of file records.
    pub files: u64,
}

/// Read-through service over store health and record counts.
#[derive(Clone)]
pub struct StatusService {
    kv: Arc<dyn KeyValueStore>,
    docs: Arc<dyn DocumentStore>,
    users: UserDirectory,
    files: FileDirectory,
}

impl StatusService {
    /// Create the service from its injected collaborators.
    pub fn new(
        kv: Arc<dyn KeyValueStore>,
        docs: Arc<dyn DocumentStore>,
        users: UserDirectory,
        files: FileDirectory,
    ) -> Self {
        Self {
            kv,
            docs,
            users,
            files,
        }
    }

    /// Current liveness of both stores.
    pub fn status(&self) -> HealthStatus {
        HealthStatus {
            kv: self.kv.is_alive(),
            db: self.docs.is_alive(),
        }
    }

    /// Current user and file counts.
    pub fn stats(&self) -> Result<UsageStats> {
        Ok(UsageStats {
            users: self.users.count()?,
            files: self.files.count()?,
        })
    }
}
