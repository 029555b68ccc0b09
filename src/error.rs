//! Error types for the files-manager core.

use thiserror::Error;

/// Common error type for all files-manager operations.
///
/// Every failure path yields exactly one of these kinds; no operation
/// returns a partial success value alongside an error. Display strings
/// match the messages the transport layer puts on the wire.
#[derive(Error, Debug)]
pub enum FilesError {
    /// Missing/invalid/expired token, or bad credentials.
    #[error("Unauthorized")]
    Unauthorized,

    /// Upload request without a name.
    #[error("Missing name")]
    MissingName,

    /// Upload request without a valid kind.
    #[error("Missing type")]
    MissingType,

    /// Upload request for a non-folder kind without content.
    #[error("Missing data")]
    MissingData,

    /// The requested parent record does not exist.
    #[error("Parent not found")]
    InvalidParent,

    /// The requested parent record exists but is not a folder.
    #[error("Parent is not a folder")]
    InvalidParentKind,

    /// An account with this email already exists.
    #[error("Already exist")]
    Conflict,

    /// Record absent, or not owned by the caller (reported identically).
    #[error("Not found")]
    NotFound,

    /// Backing store or disk failure. Not retried inside this core.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for FilesError {
    fn from(e: std::io::Error) -> Self {
        FilesError::StorageUnavailable(e.to_string())
    }
}

impl From<serde_json::Error> for FilesError {
    fn from(e: serde_json::Error) -> Self {
        FilesError::StorageUnavailable(e.to_string())
    }
}

/// Result type alias for files-manager operations.
pub type Result<T> = std::result::Result<T, FilesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_messages() {
        assert_eq!(FilesError::Unauthorized.to_string(), "Unauthorized");
        assert_eq!(FilesError::MissingName.to_string(), "Missing name");
        assert_eq!(FilesError::MissingType.to_string(), "Missing type");
        assert_eq!(FilesError::MissingData.to_string(), "Missing data");
        assert_eq!(FilesError::InvalidParent.to_string(), "Parent not found");
        assert_eq!(
            FilesError::InvalidParentKind.to_string(),
            "Parent is not a folder"
        );
        assert_eq!(FilesError::Conflict.to_string(), "Already exist");
        assert_eq!(FilesError::NotFound.to_string(), "Not found");
    }

    #[test]
    fn test_storage_unavailable_display() {
        let err = FilesError::StorageUnavailable("disk full".to_string());
        assert_eq!(err.to_string(), "storage unavailable: disk full");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: FilesError = io_err.into();
        assert!(matches!(err, FilesError::StorageUnavailable(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_err() -> Result<()> {
            Err(FilesError::NotFound)
        }

        assert!(sample_err().is_err());
    }
}
