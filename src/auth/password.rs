//! Password digests for files-manager.
//!
//! Stored credentials use the legacy SHA-1 hex digest for compatibility
//! with existing account records. The digest is deterministic, which is
//! what lets `verify` match email and digest in a single store query.

use sha1::{Digest, Sha1};

/// Length of a password digest in hex characters (160-bit SHA-1).
pub const DIGEST_LENGTH: usize = 40;

/// Digest a plaintext password into its stored form.
///
/// Deterministic one-way transform; identical input always yields the
/// identical 40-character lowercase hex string.
///
/// # Examples
///
/// ```
/// use files_manager::digest_password;
///
/// let digest = digest_password("toto1234!");
/// assert_eq!(digest.len(), 40);
/// assert_eq!(digest, digest_password("toto1234!"));
/// ```
pub fn digest_password(plaintext: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(digest_password("secret"), digest_password("secret"));
    }

    #[test]
    fn test_digest_differs_per_input() {
        assert_ne!(digest_password("secret"), digest_password("secret2"));
    }

    #[test]
    fn test_digest_length_and_charset() {
        let digest = digest_password("anything");
        assert_eq!(digest.len(), DIGEST_LENGTH);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn test_known_digest_fixture() {
        // SHA-1("toto1234!") as stored by the original deployment.
        assert_eq!(
            digest_password("toto1234!"),
            "89cad29e3ebc1035b29b1478a8e70854f25fa2b2"
        );
    }

    #[test]
    fn test_empty_input_still_digests() {
        // Presence validation happens at the service boundary; the hasher
        // itself accepts any string.
        assert_eq!(digest_password("").len(), DIGEST_LENGTH);
    }

    #[test]
    fn test_unicode_password() {
        let digest = digest_password("pässwörd✓");
        assert_eq!(digest.len(), DIGEST_LENGTH);
        assert_eq!(digest, digest_password("pässwörd✓"));
    }
}
