//! Cookie session helpers: the admin flag, flash messages and the signing key.
//!
//! Everything lives in the signed client-side cookie; there is no server-side
//! session table.

use crate::constants::{ADMIN_SESSION_KEY, FLASH_SESSION_KEY, SESSION_KEY_LENGTH};
use actix_session::Session;
use actix_web::cookie::Key;
use actix_web::{error, Error};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

/// One-shot message shown on the next rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

/// Derives the cookie signing key from a secret of any length.
///
/// `Key::from` panics below 64 bytes, so the secret is stretched with the
/// BLAKE3 extendable output.
pub fn derive_key(secret: &str) -> Key {
    let mut material = [0u8; SESSION_KEY_LENGTH];
    let mut hasher = blake3::Hasher::new_derive_key("lostfound session cookie signing key");
    hasher.update(secret.as_bytes());
    hasher.finalize_xof().fill(&mut material);
    Key::from(&material[..])
}

/// True when the session carries the admin flag.
pub fn is_admin(session: &Session) -> bool {
    matches!(session.get::<bool>(ADMIN_SESSION_KEY), Ok(Some(true)))
}

pub fn set_admin(session: &Session) -> Result<(), Error> {
    session
        .insert(ADMIN_SESSION_KEY, true)
        .map_err(|_| error::ErrorInternalServerError("middleware error"))
}

pub fn clear_admin(session: &Session) {
    session.remove(ADMIN_SESSION_KEY);
}

/// Queues a message for the next page render.
pub fn flash(session: &Session, level: FlashLevel, message: impl Into<String>) -> Result<(), Error> {
    let mut pending = peek_flashes(session);
    pending.push(Flash {
        level,
        message: message.into(),
    });
    session
        .insert(FLASH_SESSION_KEY, pending)
        .map_err(|_| error::ErrorInternalServerError("middleware error"))
}

/// Removes and returns all queued messages.
pub fn take_flashes(session: &Session) -> Vec<Flash> {
    match session.remove_as::<Vec<Flash>>(FLASH_SESSION_KEY) {
        Some(Ok(flashes)) => flashes,
        Some(Err(raw)) => {
            log::warn!("Discarding unreadable flash data: {}", raw);
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn peek_flashes(session: &Session) -> Vec<Flash> {
    session
        .get::<Vec<Flash>>(FLASH_SESSION_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}
