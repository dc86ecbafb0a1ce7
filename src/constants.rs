//! Application-wide constants
//!
//! This module contains constants used throughout the application.

/// Image extensions accepted for item photos, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Upper bound on the size of a whole submission request, photo included.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Session key holding the admin flag.
pub const ADMIN_SESSION_KEY: &str = "admin";

/// Session key holding queued flash messages.
pub const FLASH_SESSION_KEY: &str = "_flashes";

/// Cookie keys must be at least this long; shorter secrets are stretched to it.
pub const SESSION_KEY_LENGTH: usize = 64;
