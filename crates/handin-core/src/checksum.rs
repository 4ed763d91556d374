//! SHA-256 fingerprints of bundled sources (for logs and `handin files`).

use sha2::{Digest, Sha256};

/// SHA-256 of `data` as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// First 12 hex digits; enough to tell two uploads apart in a log line.
pub fn short_digest(data: &[u8]) -> String {
    let mut digest = sha256_hex(data);
    digest.truncate(12);
    digest
}
