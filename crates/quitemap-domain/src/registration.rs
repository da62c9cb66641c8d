//! Pending registration type and registration input validation.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Time a pending registration stays claimable, in seconds (1 hour).
/// Fixed by product decision; not configurable.
pub const PENDING_TTL_SECS: i64 = 3600;

/// Minimum username length in characters.
pub const USERNAME_MIN_LEN: usize = 3;

/// Maximum username length in characters.
pub const USERNAME_MAX_LEN: usize = 50;

/// Minimum password length in characters.
pub const PASSWORD_MIN_LEN: usize = 6;

/// A registration submitted on the web, waiting for its Telegram
/// confirmation. Never loginable; promotion to an [`crate::account::Account`]
/// deletes it.
#[derive(Debug, Clone)]
pub struct PendingRegistration {
    pub id: Uuid,
    pub telegram_handle: String,
    pub username: String,
    pub password_digest: String,
    /// Reserved for link-based confirmation; written but never read.
    pub confirmation_token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl PendingRegistration {
    /// Build a fresh pending registration expiring [`PENDING_TTL_SECS`]
    /// from `now`.
    pub fn new(
        username: String,
        telegram_handle: String,
        password_digest: String,
        confirmation_token: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            telegram_handle,
            username,
            password_digest,
            confirmation_token,
            expires_at: now + Duration::seconds(PENDING_TTL_SECS),
            created_at: now,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

/// First field that failed registration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRegistration {
    #[error("username must be between 3 and 50 characters")]
    Username,
    #[error("telegram handle must not be empty")]
    TelegramHandle,
    #[error("password must be at least 6 characters")]
    Password,
}

/// A normalized, validated registration submission. The password is still
/// cleartext here; hashing happens in the intake use case.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub username: String,
    pub telegram_handle: String,
    pub password: String,
}

impl RegistrationRequest {
    /// Normalize and validate raw form input.
    ///
    /// Trims whitespace on all three fields and strips one leading `@`
    /// from the handle (users paste handles both ways). Fields are checked
    /// in form order and the first violation wins.
    pub fn parse(
        username: &str,
        telegram_handle: &str,
        password: &str,
    ) -> Result<Self, InvalidRegistration> {
        let username = username.trim();
        let telegram_handle = normalize_handle(telegram_handle);
        let password = password.trim();

        let username_len = username.chars().count();
        if username_len < USERNAME_MIN_LEN || username_len > USERNAME_MAX_LEN {
            return Err(InvalidRegistration::Username);
        }
        if telegram_handle.is_empty() {
            return Err(InvalidRegistration::TelegramHandle);
        }
        if password.chars().count() < PASSWORD_MIN_LEN {
            return Err(InvalidRegistration::Password);
        }

        Ok(Self {
            username: username.to_owned(),
            telegram_handle,
            password: password.to_owned(),
        })
    }
}

/// Trim whitespace and strip one leading `@` from a Telegram handle.
pub fn normalize_handle(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed).to_owned()
}
