//! Configuration module for files-manager.

use std::path::Path;

use serde::Deserialize;

use crate::{FilesError, Result};

/// Key-value store connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyValueConfig {
    /// Host of the key-value store.
    #[serde(default = "default_kv_host")]
    pub host: String,
    /// Port of the key-value store.
    #[serde(default = "default_kv_port")]
    pub port: u16,
}

fn default_kv_host() -> String {
    "localhost".to_string()
}

fn default_kv_port() -> u16 {
    6379
}

impl Default for KeyValueConfig {
    fn default() -> Self {
        Self {
            host: default_kv_host(),
            port: default_kv_port(),
        }
    }
}

/// Document store connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentStoreConfig {
    /// Host of the document store.
    #[serde(default = "default_db_host")]
    pub host: String,
    /// Port of the document store.
    #[serde(default = "default_db_port")]
    pub port: u16,
    /// Database name.
    #[serde(default = "default_db_database")]
    pub database: String,
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    27017
}

fn default_db_database() -> String {
    "files_manager".to_string()
}

impl Default for DocumentStoreConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            database: default_db_database(),
        }
    }
}

/// Blob storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory for stored blobs.
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
}

fn default_storage_path() -> String {
    crate::file::DEFAULT_STORAGE_ROOT.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/files_manager.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Key-value store connection.
    #[serde(default)]
    pub kv: KeyValueConfig,
    /// Document store connection.
    #[serde(default)]
    pub db: DocumentStoreConfig,
    /// Blob storage.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| FilesError::Config(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| FilesError::Config(format!("config parse error: {e}")))
    }
}
