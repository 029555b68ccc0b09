//! Session token lifecycle for files-manager.
//!
//! Tokens are opaque uuid-v4 strings mapped to a user identifier in the
//! key-value store under `auth_<token>`, with a fixed 24-hour expiry. The
//! mapping is the sole source of truth for "who is the current actor":
//! every resolve is a live lookup, so revocation takes effect immediately
//! for subsequent requests.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::store::KeyValueStore;
use crate::Result;

/// Token time-to-live (24 hours).
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// Key prefix for token entries in the key-value store.
const TOKEN_KEY_PREFIX: &str = "auth_";

/// Store for opaque session tokens.
///
/// Multiple live tokens may exist per user; there is no single-session
/// enforcement and no session enumeration.
#[derive(Clone)]
pub struct TokenStore {
    kv: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    /// Create a token store over an injected key-value client.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Issue a fresh token for a user and persist it with the fixed TTL.
    pub fn issue(&self, user_id: &str) -> Result<String> {
        let token = Uuid::new_v4().to_string();
        self.kv
            .set_with_expiry(&token_key(&token), user_id, TOKEN_TTL_SECS)?;

        info!(user_id = %user_id, token = %token, "Session token issued");
        Ok(token)
    }

    /// Resolve a token to its user identifier.
    ///
    /// Returns `None` when the token is unknown or expired; the store
    /// enforces expiry, this component never checks it.
    pub fn resolve(&self, token: &str) -> Result<Option<String>> {
        self.kv.get(&token_key(token))
    }

    /// Revoke a token unconditionally. Revoking an absent token is a
    /// no-op, not an error.
    pub fn revoke(&self, token: &str) -> Result<()> {
        self.kv.delete(&token_key(token))?;
        debug!(token = %token, "Session token revoked");
        Ok(())
    }
}

fn token_key(token: &str) -> String {
    format!("{TOKEN_KEY_PREFIX}{token}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryKeyValueStore;

    fn setup() -> TokenStore {
        TokenStore::new(Arc::new(MemoryKeyValueStore::new()))
    }

    #[test]
    fn test_issue_then_resolve() {
        let tokens = setup();

        let token = tokens.issue("user-1").unwrap();
        assert_eq!(tokens.resolve(&token).unwrap(), Some("user-1".to_string()));
    }

    #[test]
    fn test_tokens_are_unique_per_issue() {
        let tokens = setup();

        let first = tokens.issue("user-1").unwrap();
        let second = tokens.issue("user-1").unwrap();
        assert_ne!(first, second);

        // Both remain live; no single-session enforcement.
        assert!(tokens.resolve(&first).unwrap().is_some());
        assert!(tokens.resolve(&second).unwrap().is_some());
    }

    #[test]
    fn test_resolve_unknown_token() {
        let tokens = setup();
        assert_eq!(tokens.resolve("no-such-token").unwrap(), None);
    }

    #[test]
    fn test_revoke_takes_effect_immediately() {
        let tokens = setup();

        let token = tokens.issue("user-1").unwrap();
        tokens.revoke(&token).unwrap();
        assert_eq!(tokens.resolve(&token).unwrap(), None);
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let tokens = setup();

        let token = tokens.issue("user-1").unwrap();
        tokens.revoke(&token).unwrap();
        tokens.revoke(&token).unwrap();
        tokens.revoke("never-issued").unwrap();
    }

    #[test]
    fn test_key_pattern() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let tokens = TokenStore::new(Arc::clone(&kv) as Arc<dyn KeyValueStore>);

        let token = tokens.issue("user-1").unwrap();

        let raw = kv.get(&format!("auth_{token}")).unwrap();
        assert_eq!(raw, Some("user-1".to_string()));
    }
}
