//! Cryptographic Utilities

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

/// Generate a random 32-byte secret (development signing key / pepper)
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Short, non-reversible fingerprint of a secret, safe to log
///
/// Lets operators confirm which key a process is running with.
pub fn key_fingerprint(secret: &[u8]) -> String {
    hex::encode(&sha256(secret)[..8])
}
