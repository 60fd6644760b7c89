//! # Key Hashing
//!
//! Deterministic identifiers for public keys and arbitrary byte blobs.
//!
//! - **Public key hash**: SHA-256, unpadded URL-safe base64, `#SHA256` suffix.
//!   The canonical identifier used to match envelope entries to a reader.
//! - **Reader id**: SHA-1, unpadded URL-safe base64, wrapped as `Key!...#SHA1`.
//!   A distinguishable id for the same key material.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use shared_types::protocol::{READER_ID_PREFIX, SHA1_SUFFIX, SHA256_SUFFIX};

/// SHA-256 output (256-bit).
pub type Sha256Digest = [u8; 32];

/// SHA-1 output (160-bit).
pub type Sha1Digest = [u8; 20];

/// Hasher producing the textual key identifiers of the ledger protocol.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyHasher;

impl KeyHasher {
    /// Create a new key hasher.
    pub fn new() -> Self {
        Self
    }

    /// Public key hash of `data`.
    pub fn hash(&self, data: &[u8]) -> String {
        public_key_hash(data)
    }

    /// Reader id of `data`.
    pub fn reader_id(&self, data: &[u8]) -> String {
        reader_id(data)
    }
}

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Sha256Digest {
    Sha256::digest(data).into()
}

/// Hash data with SHA-1 (one-shot).
pub fn sha1(data: &[u8]) -> Sha1Digest {
    Sha1::digest(data).into()
}

/// Compute the public key hash of an encoded key.
pub fn public_key_hash(data: &[u8]) -> String {
    let mut out = URL_SAFE_NO_PAD.encode(sha256(data));
    out.push_str(SHA256_SUFFIX);
    out
}

/// Compute the reader id of a key, certificate or any other blob.
pub fn reader_id(data: &[u8]) -> String {
    let digest = URL_SAFE_NO_PAD.encode(sha1(data));
    let mut out = String::with_capacity(READER_ID_PREFIX.len() + digest.len() + SHA1_SUFFIX.len());
    out.push_str(READER_ID_PREFIX);
    out.push_str(&digest);
    out.push_str(SHA1_SUFFIX);
    out
}
