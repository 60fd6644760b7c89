//! # Reader Key Errors
//!
//! Error types for key encoding, loading and unwrapping.

use super::keys::KeyAlgorithm;
use shared_types::TagError;
use thiserror::Error;

/// Errors that can occur while handling reader keys.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    /// The operation has no implementation for this key algorithm
    #[error("Unsupported key algorithm: {0}")]
    UnsupportedKeyAlgorithm(KeyAlgorithm),

    /// The reader key holds only a public key
    #[error("Reader key has no private key")]
    NoPrivateKey,

    /// RSA-OAEP unwrap failed (wrong key or corrupted blob, not distinguished)
    #[error("Key unwrap failed")]
    DecryptionFailed,

    /// Key material could not be parsed or is inconsistent
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Canonical key encoding is malformed
    #[error("Malformed key encoding: {0}")]
    Tag(#[from] TagError),
}
