//! Application configuration from file and environment variables
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Environment variables (prefixed with LF_)
//! 2. Config file (config.toml)
//! 3. Default values
//!
//! Top-level keys map directly onto `LF_ADMIN_USER`, `LF_ADMIN_PASS` and
//! `LF_SECRET_KEY`. Nested sections use a double underscore, for example
//! `LF_STORAGE__UPLOAD_DIR`.

use crate::constants::DEFAULT_MAX_UPLOAD_BYTES;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

const DEFAULT_ADMIN_USER: &str = "admin";
const DEFAULT_ADMIN_PASS: &str = "admin123";
const DEFAULT_SECRET_KEY: &str = "dev-secret-change-me";

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite connection string for the items and claims tables
    pub database_url: String,
    /// Directory holding uploaded photos
    pub upload_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://lostfound.db?mode=rwc".to_string(),
            upload_dir: "./uploads".to_string(),
        }
    }
}

/// Request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum size of a submission request in bytes
    pub max_upload_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Admin login name (env LF_ADMIN_USER)
    pub admin_user: String,
    /// Admin password (env LF_ADMIN_PASS)
    pub admin_pass: String,
    /// Secret used to sign session cookies (env LF_SECRET_KEY)
    pub secret_key: String,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub limits: LimitsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin_user: DEFAULT_ADMIN_USER.to_string(),
            admin_pass: DEFAULT_ADMIN_PASS.to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("config.toml")
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &str) -> Result<Self, ConfigError> {
        use config::FileFormat;

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::new(path, FileFormat::Toml).required(false))
            // e.g., LF_ADMIN_USER, LF_STORAGE__DATABASE_URL
            .add_source(
                Environment::with_prefix("LF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Names of the security-sensitive settings still holding their shipped defaults.
    pub fn insecure_defaults(&self) -> Vec<&'static str> {
        let mut insecure = Vec::new();
        if self.admin_user == DEFAULT_ADMIN_USER {
            insecure.push("admin_user");
        }
        if self.admin_pass == DEFAULT_ADMIN_PASS {
            insecure.push("admin_pass");
        }
        if self.secret_key == DEFAULT_SECRET_KEY {
            insecure.push("secret_key");
        }
        insecure
    }

    /// Exact comparison against the configured admin credential pair.
    pub fn admin_credentials_match(&self, username: &str, password: &str) -> bool {
        username == self.admin_user && password == self.admin_pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.admin_user, "admin");
        assert_eq!(config.admin_pass, "admin123");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.limits.max_upload_bytes, 8 * 1024 * 1024);
        assert_eq!(config.storage.upload_dir, "./uploads");
    }

    #[test]
    fn test_defaults_are_reported_insecure() {
        let config = AppConfig::default();
        assert_eq!(
            config.insecure_defaults(),
            vec!["admin_user", "admin_pass", "secret_key"]
        );

        let config = AppConfig {
            admin_pass: "hunter22".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.insecure_defaults(), vec!["admin_user", "secret_key"]);
    }

    #[test]
    fn test_credentials_compare_exactly() {
        let config = AppConfig::default();
        assert!(config.admin_credentials_match("admin", "admin123"));
        assert!(!config.admin_credentials_match("Admin", "admin123"));
        assert!(!config.admin_credentials_match("admin", "admin123 "));
        assert!(!config.admin_credentials_match("", ""));
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
admin_user = "desk"
secret_key = "a much longer secret than the default one"

[server]
port = 9090

[storage]
upload_dir = "/var/lib/lostfound/uploads"
"#
        )
        .unwrap();

        let config = AppConfig::load_from_path(temp_file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.admin_user, "desk");
        assert_eq!(config.secret_key, "a much longer secret than the default one");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.storage.upload_dir, "/var/lib/lostfound/uploads");
        // Defaults should still apply for unspecified values
        assert_eq!(config.admin_pass, "admin123");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.limits.max_upload_bytes, 8 * 1024 * 1024);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let config = AppConfig::load_from_path("/nonexistent/config.toml").unwrap();
        assert_eq!(config.storage.database_url, "sqlite://lostfound.db?mode=rwc");
        assert_eq!(config.server.port, 8000);
    }
}
