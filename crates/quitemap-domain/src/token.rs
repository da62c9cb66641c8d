//! Opaque token generation for confirmation and activation tokens.

use rand::RngExt;

/// Charset for generated tokens (URL-safe base64 alphabet).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Token length in characters. 43 chars over a 64-symbol alphabet carry
/// 258 bits, unguessable and safe to embed in a URL path.
pub const TOKEN_LEN: usize = 43;

/// Generate a fresh opaque token from the OS-seeded generator.
pub fn generate_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
