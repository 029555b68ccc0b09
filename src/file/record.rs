//! File record types for files-manager.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ROOT_PARENT_ID;

/// Kind of a file record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Container for other records; never carries stored bytes.
    Folder,
    /// Plain file with content in the blob store.
    File,
    /// Image with content in the blob store.
    Image,
}

impl FileKind {
    /// Stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Folder => "folder",
            FileKind::File => "file",
            FileKind::Image => "image",
        }
    }

    /// Whether records of this kind carry a storage locator.
    pub fn has_content(&self) -> bool {
        !matches!(self, FileKind::Folder)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folder" => Ok(FileKind::Folder),
            "file" => Ok(FileKind::File),
            "image" => Ok(FileKind::Image),
            _ => Err(format!("unknown file kind: {s}")),
        }
    }
}

/// A file-metadata record: folder, plain file, or image.
///
/// Owned by exactly one user; ownership never transfers. Only the
/// visibility flag is mutable, and only by the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Store-assigned unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Identifier of the owning user.
    pub owner_id: String,
    /// User-supplied display name (non-empty).
    pub name: String,
    /// Record kind.
    pub kind: FileKind,
    /// Parent record identifier; the root sentinel `"0"` when top-level.
    pub parent_id: String,
    /// Public/private visibility flag (private by default).
    pub is_public: bool,
    /// Blob store locator; present exactly for non-folder kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_locator: Option<String>,
}

/// Data for creating a new file record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFileRecord {
    /// Identifier of the owning user.
    pub owner_id: String,
    /// Display name.
    pub name: String,
    /// Record kind.
    pub kind: FileKind,
    /// Parent record identifier (defaults to the root sentinel).
    pub parent_id: String,
    /// Visibility flag (defaults to private).
    pub is_public: bool,
    /// Blob store locator for non-folder kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_locator: Option<String>,
}

impl NewFileRecord {
    /// Create a new record at the root, private, with no stored bytes.
    pub fn new(owner_id: impl Into<String>, name: impl Into<String>, kind: FileKind) -> Self {
        Self {
            owner_id: owner_id.into(),
            name: name.into(),
            kind,
            parent_id: ROOT_PARENT_ID.to_string(),
            is_public: false,
            storage_locator: None,
        }
    }

    /// Set the parent record.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = parent_id.into();
        self
    }

    /// Set the visibility flag.
    pub fn with_visibility(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Set the storage locator.
    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.storage_locator = Some(locator.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in [FileKind::Folder, FileKind::File, FileKind::Image] {
            assert_eq!(kind.as_str().parse::<FileKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_rejects_unknown() {
        assert!("document".parse::<FileKind>().is_err());
        assert!("".parse::<FileKind>().is_err());
        assert!("Folder".parse::<FileKind>().is_err());
    }

    #[test]
    fn test_kind_content_expectations() {
        assert!(!FileKind::Folder.has_content());
        assert!(FileKind::File.has_content());
        assert!(FileKind::Image.has_content());
    }

    #[test]
    fn test_new_record_defaults() {
        let record = NewFileRecord::new("user-1", "notes", FileKind::Folder);

        assert_eq!(record.parent_id, ROOT_PARENT_ID);
        assert!(!record.is_public);
        assert!(record.storage_locator.is_none());
    }

    #[test]
    fn test_new_record_builder() {
        let record = NewFileRecord::new("user-1", "photo.png", FileKind::Image)
            .with_parent("parent-9")
            .with_visibility(true)
            .with_locator("loc-1");

        assert_eq!(record.parent_id, "parent-9");
        assert!(record.is_public);
        assert_eq!(record.storage_locator.as_deref(), Some("loc-1"));
    }

    #[test]
    fn test_record_persisted_field_names() {
        let doc = serde_json::to_value(
            NewFileRecord::new("user-1", "notes", FileKind::File).with_locator("loc-1"),
        )
        .unwrap();

        assert_eq!(doc["ownerId"], "user-1");
        assert_eq!(doc["kind"], "file");
        assert_eq!(doc["parentId"], "0");
        assert_eq!(doc["isPublic"], false);
        assert_eq!(doc["storageLocator"], "loc-1");
    }

    #[test]
    fn test_folder_doc_has_no_locator_field() {
        let doc =
            serde_json::to_value(NewFileRecord::new("user-1", "notes", FileKind::Folder)).unwrap();
        assert!(doc.get("storageLocator").is_none());
    }
}
