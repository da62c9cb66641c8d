//! Builders for registration-workflow fixtures.

use chrono::{Duration, Utc};
use uuid::Uuid;

use quitemap_domain::account::Account;
use quitemap_domain::password::hash_password;
use quitemap_domain::registration::{PENDING_TTL_SECS, PendingRegistration};

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// An inactive account awaiting activation, with a known token.
pub fn inactive_account(username: &str, handle: &str, activation_token: &str) -> Account {
    Account {
        id: Uuid::now_v7(),
        username: username.to_owned(),
        password_digest: "$argon2id$unverifiable-test-digest".to_owned(),
        telegram_handle: handle.to_owned(),
        is_active: false,
        activation_token: Some(activation_token.to_owned()),
        created_at: Utc::now(),
    }
}

/// An activated account (no token; activation cleared it).
pub fn active_account(username: &str, handle: &str) -> Account {
    Account {
        activation_token: None,
        is_active: true,
        ..inactive_account(username, handle, "unused")
    }
}

/// An activated account whose digest verifies against `password`.
/// Hashes for real; use only where the login path is under test.
pub fn active_account_with_password(username: &str, handle: &str, password: &str) -> Account {
    Account {
        password_digest: hash_password(password).expect("hash test password"),
        ..active_account(username, handle)
    }
}

/// A live pending registration (expires in one hour).
pub fn pending(username: &str, handle: &str) -> PendingRegistration {
    PendingRegistration::new(
        username.to_owned(),
        handle.to_owned(),
        "$argon2id$unverifiable-test-digest".to_owned(),
        "reserved-confirmation-token".to_owned(),
        Utc::now(),
    )
}

/// A pending registration whose TTL ran out a minute ago.
pub fn expired_pending(username: &str, handle: &str) -> PendingRegistration {
    PendingRegistration::new(
        username.to_owned(),
        handle.to_owned(),
        "$argon2id$unverifiable-test-digest".to_owned(),
        "reserved-confirmation-token".to_owned(),
        Utc::now() - Duration::seconds(PENDING_TTL_SECS + 60),
    )
}
