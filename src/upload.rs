//! Photo upload naming rules.
//!
//! Stored names are `{utc timestamp with microseconds}_{sanitised original}`.
//! The timestamp makes collisions practically impossible without checking
//! the directory first.

use crate::constants::ALLOWED_EXTENSIONS;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("static regex"));

const FALLBACK_STEM: &str = "photo";

/// Lowercased text after the final dot, if there is one.
pub fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// True when the filename carries one of the allowed image extensions.
pub fn allowed_file(filename: &str) -> bool {
    match extension(filename) {
        Some(ext) => ALLOWED_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

/// Reduces a client supplied filename to a flat, ASCII-only name.
///
/// Path separators become spaces, whitespace runs become `_`, anything
/// outside `[A-Za-z0-9_.-]` is dropped and leading or trailing `.`/`_` are
/// trimmed. The result may be empty.
pub fn secure_filename(filename: &str) -> String {
    let flattened = filename.replace(['/', '\\'], " ");
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_CHARS.replace_all(&joined, "");
    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Builds the on-disk name for an accepted photo.
///
/// Sanitising can strip the whole stem or the extension dot (e.g. non-ASCII
/// names), so the lowercased extension is re-appended when it went missing.
pub fn stored_filename(original: &str, now: DateTime<Utc>) -> String {
    let mut name = secure_filename(original);
    if let Some(ext) = extension(original) {
        if !name.to_lowercase().ends_with(&format!(".{}", ext)) {
            if name.is_empty() || name == ext {
                name = FALLBACK_STEM.to_string();
            }
            name = format!("{}.{}", name, ext);
        }
    }
    if name.is_empty() {
        name = FALLBACK_STEM.to_string();
    }
    format!("{}_{}", now.format("%Y%m%d%H%M%S%6f"), name)
}

/// True when `name` is a single path component that cannot escape the upload directory.
pub fn is_safe_stored_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(['/', '\\'])
        && !name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_allowed_extensions() {
        assert!(allowed_file("cat.png"));
        assert!(allowed_file("CAT.JPG"));
        assert!(allowed_file("scan.final.jpeg"));
        assert!(allowed_file("a.gif"));
        assert!(allowed_file("a.webp"));
        assert!(!allowed_file("receipt.pdf"));
        assert!(!allowed_file("png"));
        assert!(!allowed_file("photo.png.exe"));
        assert!(!allowed_file(""));
    }

    #[test]
    fn test_secure_filename() {
        assert_eq!(secure_filename("My cat photo.jpg"), "My_cat_photo.jpg");
        assert_eq!(secure_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(secure_filename("C:\\Users\\me\\wallet.png"), "C_Users_me_wallet.png");
        assert_eq!(secure_filename("  .hidden.gif "), "hidden.gif");
        assert_eq!(secure_filename("naïve.png"), "nave.png");
        assert_eq!(secure_filename("my..keys.png"), "my..keys.png");
        assert_eq!(secure_filename("照片"), "");
    }

    #[test]
    fn test_stored_filename_prefixes_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap() + Duration::microseconds(123456);
        assert_eq!(
            stored_filename("Blue Backpack.JPG", now),
            "20240305140709123456_Blue_Backpack.JPG"
        );
    }

    #[test]
    fn test_stored_filename_keeps_extension_for_unsafe_names() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::microseconds(1);
        assert_eq!(stored_filename("照片.png", now), "20240101000000000001_photo.png");
        assert_eq!(stored_filename("keys!.webp", now), "20240101000000000001_keys.webp");
    }

    #[test]
    fn test_safe_stored_name() {
        assert!(is_safe_stored_name("20240101000000000001_photo.png"));
        assert!(is_safe_stored_name("20240101000000000001_my..keys.png"));
        assert!(!is_safe_stored_name("../lostfound.db"));
        assert!(!is_safe_stored_name(".."));
        assert!(!is_safe_stored_name("..\\lostfound.db"));
        assert!(!is_safe_stored_name("a/b.png"));
        assert!(!is_safe_stored_name(".env"));
        assert!(!is_safe_stored_name(""));
    }
}
