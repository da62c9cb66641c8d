//! Account domain type.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user account. `username` and `telegram_handle` are unique and
/// immutable after creation; `is_active` gates login.
///
/// Invariant: `is_active` implies `activation_token.is_none()`. The token
/// exists only between promotion and activation.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub password_digest: String,
    pub telegram_handle: String,
    pub is_active: bool,
    pub activation_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Build the inactive account a pending registration promotes into.
    pub fn promoted(
        username: String,
        password_digest: String,
        telegram_handle: String,
        activation_token: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            username,
            password_digest,
            telegram_handle,
            is_active: false,
            activation_token: Some(activation_token),
            created_at: now,
        }
    }
}
