//! Storage backend abstraction for item photos.
//!
//! Items reference photos by stored filename only; the backend owns where
//! the bytes live. Currently only the local filesystem backend exists.

pub mod local;

pub use local::LocalStorage;

use actix_web::web::Bytes;
use async_trait::async_trait;

/// Represents a retrieved storage object with metadata.
pub struct StorageObject {
    /// File content
    pub body: Bytes,
    /// Content length in bytes
    pub content_length: u64,
    /// MIME content type
    pub content_type: String,
}

/// Storage operation errors.
#[derive(Debug)]
pub enum StorageError {
    /// File not found
    NotFound(String),
    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::NotFound(msg) => write!(f, "Not found: {}", msg),
            StorageError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound(e.to_string())
        } else {
            StorageError::Io(e)
        }
    }
}

/// Trait for storage backends.
///
/// Keys are stored filenames as produced by [`crate::upload::stored_filename`].
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Store a file under `filename`, replacing any existing content.
    async fn put_object(&self, data: Vec<u8>, filename: &str) -> Result<(), StorageError>;

    /// Retrieve a file.
    async fn get_object(&self, key: &str) -> Result<StorageObject, StorageError>;

    /// Remove a file. Missing files yield `StorageError::NotFound`.
    async fn delete_object(&self, key: &str) -> Result<(), StorageError>;

    /// Check if a file exists.
    async fn exists(&self, filename: &str) -> Result<bool, StorageError>;
}
