//! Local filesystem storage backend.

use super::{StorageBackend, StorageError, StorageObject};
use actix_web::web::{self, Bytes};
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

/// Local filesystem storage backend.
pub struct LocalStorage {
    /// Directory holding every stored photo, flat.
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new local storage backend.
    ///
    /// The `base_path` directory will be created if it doesn't exist.
    pub fn new(base_path: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&base_path)?;
        log::info!("LocalStorage initialized at {:?}", base_path);
        Ok(Self { base_path })
    }

    /// Full path of a stored file.
    pub fn get_file_path(&self, filename: &str) -> PathBuf {
        self.base_path.join(filename)
    }

    /// Get MIME type from filename extension.
    fn get_mime_type(filename: &str) -> &'static str {
        let ext = crate::upload::extension(filename).unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
    }
}

#[async_trait]
impl StorageBackend for LocalStorage {
    async fn put_object(&self, data: Vec<u8>, filename: &str) -> Result<(), StorageError> {
        let path = self.get_file_path(filename);
        log::info!("LocalStorage: put_object: {:?}", path);

        // Use web::block for blocking file operations
        web::block(move || fs::write(&path, data))
            .await
            .map_err(|e| StorageError::Io(std::io::Error::other(e)))??;

        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<StorageObject, StorageError> {
        let path = self.get_file_path(key);
        log::debug!("LocalStorage: get_object: {:?}", path);

        let buffer = web::block(move || fs::read(&path))
            .await
            .map_err(|e| StorageError::Io(std::io::Error::other(e)))??;

        Ok(StorageObject {
            content_length: buffer.len() as u64,
            content_type: Self::get_mime_type(key).to_string(),
            body: Bytes::from(buffer),
        })
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        let path = self.get_file_path(key);
        log::info!("LocalStorage: delete_object: {:?}", path);

        web::block(move || fs::remove_file(&path))
            .await
            .map_err(|e| StorageError::Io(std::io::Error::other(e)))??;

        Ok(())
    }

    async fn exists(&self, filename: &str) -> Result<bool, StorageError> {
        let path = self.get_file_path(filename);
        Ok(path.exists())
    }
}
