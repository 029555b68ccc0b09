//! User accounts for files-manager.

mod directory;

pub use directory::UserDirectory;

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Created once via registration and immutable thereafter; ownership of
/// file records is expressed through the user identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Unique email address.
    pub email: String,
    /// One-way password digest (never the plaintext).
    pub password_digest: String,
}
