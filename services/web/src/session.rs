//! Session token issuance and cookie building.
//!
//! The login gate hands back a JWT both as a JSON field and as an
//! HTTP-only cookie. Everything beyond issuance (validation middleware,
//! refresh) lives outside this service.

use std::time::{SystemTime, UNIX_EPOCH};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use time::Duration;
use uuid::Uuid;

/// Cookie name for the session token.
pub const SESSION_COOKIE: &str = "quitemap_session";

/// Session JWT lifetime in seconds (4 hours).
pub const SESSION_EXP_SECS: u64 = 14400;

/// JWT claims for the session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account ID (UUID string).
    pub sub: String,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign an HS256 session token for an account. Returns the token and its
/// expiry timestamp.
pub fn issue_session_token(
    account_id: Uuid,
    secret: &str,
) -> Result<(String, u64), jsonwebtoken::errors::Error> {
    let exp = now_secs() + SESSION_EXP_SECS;
    let claims = SessionClaims {
        sub: account_id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok((token, exp))
}

/// Set the session cookie on the jar.
pub fn set_session_cookie(jar: CookieJar, value: String, domain: String) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .domain(domain)
        .max_age(Duration::seconds(SESSION_EXP_SECS as i64))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}
