//! Authorization service for files-manager.
//!
//! Composes the token store and the user directory: credentials become
//! tokens, tokens resolve back to user identifiers, and ownership is the
//! sole grant relation for record access.
//!
//! A token moves `issued → active → revoked|expired`; once it resolves
//! to absent there is no transition back.

use tracing::{info, warn};

use crate::file::FileRecord;
use crate::user::UserDirectory;
use crate::{FilesError, Result};

use super::TokenStore;

/// Resolves identities from credentials and tokens, and decides record
/// ownership.
#[derive(Clone)]
pub struct AuthService {
    tokens: TokenStore,
    users: UserDirectory,
}

impl AuthService {
    /// Create the service from its injected collaborators.
    pub fn new(tokens: TokenStore, users: UserDirectory) -> Self {
        Self { tokens, users }
    }

    /// Exchange credentials for a fresh session token.
    ///
    /// Fails with `Unauthorized` without revealing which credential was
    /// wrong.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<String> {
        let user = match self.users.verify(email, password)? {
            Some(user) => user,
            None => {
                warn!(email = %email, "Authentication failed");
                return Err(FilesError::Unauthorized);
            }
        };

        let token = self.tokens.issue(&user.id)?;
        info!(email = %email, user_id = %user.id, "Authentication succeeded");
        Ok(token)
    }

    /// Resolve a token to the acting user's identifier.
    pub fn identify(&self, token: &str) -> Result<String> {
        self.tokens.resolve(token)?.ok_or(FilesError::Unauthorized)
    }

    /// End the session behind a token.
    ///
    /// An unknown or expired token is `Unauthorized`; a live one is
    /// revoked immediately.
    pub fn sign_out(&self, token: &str) -> Result<()> {
        let user_id = self.identify(token)?;
        self.tokens.revoke(token)?;
        info!(user_id = %user_id, "Session signed out");
        Ok(())
    }

    /// Whether `user_id` owns `record`. No other grant path exists.
    pub fn authorize_ownership(&self, user_id: &str, record: &FileRecord) -> bool {
        record.owner_id == user_id
    }
}
