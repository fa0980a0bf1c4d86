//! Random token generation and one-way token digests.
//!
//! Two distinct operations with different contracts:
//!
//! - [`generate_token`] mints bearer tokens (session ids, CSRF tokens,
//!   one-shot verification tokens) from a CSPRNG.
//! - [`hash_token`] produces the deterministic digest under which a token
//!   is stored. Unlike password hashing there is no salt: the digest exists
//!   for equality checks against what the client later presents, and the
//!   cleartext token itself is never persisted server-side.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generates `length` cryptographically secure random bytes, hex-encoded
/// to `2 * length` lowercase characters.
pub fn generate_token(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Computes the SHA-256 digest of a token, hex-encoded. Deterministic:
/// the same token always yields the same digest.
pub fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    hex::encode(digest)
}
