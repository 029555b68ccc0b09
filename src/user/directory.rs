//! User directory backed by the document store.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::auth::digest_password;
use crate::store::DocumentCollection;
use crate::{FilesError, Result};

use super::User;

/// Create/lookup users in the `users` collection.
///
/// Enforces email uniqueness at registration. Callers validate field
/// presence before reaching this component.
#[derive(Clone)]
pub struct UserDirectory {
    users: Arc<dyn DocumentCollection>,
}

impl UserDirectory {
    /// Create a directory over an injected `users` collection handle.
    pub fn new(users: Arc<dyn DocumentCollection>) -> Self {
        Self { users }
    }

    /// Register a new account.
    ///
    /// Fails with `Conflict` when an account with this email already
    /// exists; otherwise stores the email with the password digest and
    /// returns the new user.
    pub fn register(&self, email: &str, password: &str) -> Result<User> {
        if self.users.find_one(&json!({ "email": email }))?.is_some() {
            warn!(email = %email, "Registration rejected: email already taken");
            return Err(FilesError::Conflict);
        }

        let password_digest = digest_password(password);
        let id = self.users.insert_one(json!({
            "email": email,
            "passwordDigest": password_digest,
        }))?;

        info!(email = %email, user_id = %id, "New user registered");

        Ok(User {
            id,
            email: email.to_string(),
            password_digest,
        })
    }

    /// Verify credentials, returning the matching user.
    ///
    /// A wrong email and a wrong password are indistinguishable to the
    /// caller: both yield `None`.
    pub fn verify(&self, email: &str, password: &str) -> Result<Option<User>> {
        let filter = json!({
            "email": email,
            "passwordDigest": digest_password(password),
        });

        match self.users.find_one(&filter)? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    /// Look up a user by identifier.
    pub fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        match self.users.find_one(&json!({ "_id": user_id }))? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    /// Number of registered users.
    pub fn count(&self) -> Result<u64> {
        self.users.count()
    }
}
