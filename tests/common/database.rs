//! Test database setup
//!
//! Every test gets its own SQLite file and upload directory inside a
//! temporary directory, so tests can run in parallel.
#![allow(dead_code)]

use lostfound::app_config::AppConfig;
use lostfound::storage::{LocalStorage, StorageBackend};
use sea_orm::{DatabaseConnection, DbErr};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestEnv {
    pub db: DatabaseConnection,
    pub storage: Arc<dyn StorageBackend>,
    pub config: AppConfig,
    pub upload_dir: PathBuf,
    /// Removed on drop; keep the env alive for the whole test.
    pub dir: TempDir,
}

/// Fresh database and upload directory with the default admin credentials.
pub async fn setup_test_env() -> Result<TestEnv, DbErr> {
    setup_test_env_with(AppConfig::default()).await
}

/// Like [`setup_test_env`], keeping the non-storage settings of `config`.
pub async fn setup_test_env_with(mut config: AppConfig) -> Result<TestEnv, DbErr> {
    let dir = tempfile::tempdir().map_err(|e| DbErr::Custom(e.to_string()))?;
    let upload_dir = dir.path().join("uploads");

    config.storage.database_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
    config.storage.upload_dir = upload_dir.display().to_string();

    let db = lostfound::db::init_db(&config.storage.database_url).await?;
    let storage: Arc<dyn StorageBackend> = Arc::new(
        LocalStorage::new(upload_dir.clone()).map_err(|e| DbErr::Custom(e.to_string()))?,
    );

    Ok(TestEnv {
        db,
        storage,
        config,
        upload_dir,
        dir,
    })
}

/// Names of the files currently in the upload directory.
pub fn uploaded_files(env: &TestEnv) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(&env.upload_dir)
        .expect("Failed to read upload dir")
        .map(|entry| {
            entry
                .expect("Failed to read upload dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
