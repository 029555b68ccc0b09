//! Authentication and authorization for files-manager.
//!
//! Provides the credential hasher, session token store, and the
//! authorization service composing them with the user directory.

mod password;
mod service;
mod token;

pub use password::{digest_password, DIGEST_LENGTH};
pub use service::AuthService;
pub use token::{TokenStore, TOKEN_TTL_SECS};
