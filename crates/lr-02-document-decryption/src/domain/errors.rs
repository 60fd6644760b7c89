//! # Decryption Errors
//!
//! Error types for reading encrypted documents. Every failure is terminal for
//! the call that produced it; nothing is retried.

use lr_01_reader_keys::{KeyAlgorithm, KeyError};
use shared_crypto::CryptoError;
use shared_types::TagError;
use thiserror::Error;

/// Errors that can occur while decrypting a document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecryptionError {
    /// Envelope declares a cipher other than `AES256`
    #[error("Unsupported cipher: {0:?}")]
    UnsupportedCipher(String),

    /// No reading key entry matches the reader (expected, not a fault)
    #[error("Not a reading key: {public_key_hash}")]
    NotAReadingKey {
        /// Hash of the reader key that was looked up
        public_key_hash: String,
    },

    /// The reader key holds no private key
    #[error("Reader key has no private key")]
    NoPrivateKey,

    /// RSA unwrap of the key or IV failed
    #[error("Key unwrap failed")]
    DecryptionFailed,

    /// A base64 field is malformed
    #[error("Invalid base64 in field {field}")]
    InvalidEncoding {
        /// Name of the offending field
        field: &'static str,
    },

    /// Unwrapped IV is not one block long
    #[error("Invalid IV length: {0} bytes")]
    InvalidIv(usize),

    /// Ciphertext is not a whole number of blocks
    #[error("Invalid ciphertext length: {0} bytes")]
    InvalidCiphertext(usize),

    /// Unwrapped key is not an AES key size
    #[error("Invalid key length: {0} bytes")]
    InvalidKeyLength(usize),

    /// Padding bytes are invalid for the configured scheme
    #[error("Invalid padding")]
    InvalidPadding,

    /// Plaintext is not a well-formed string tag
    #[error("Malformed payload tag: {0}")]
    MalformedTag(#[from] TagError),

    /// The reader key algorithm cannot unwrap
    #[error("Unsupported key algorithm: {0}")]
    UnsupportedKeyAlgorithm(KeyAlgorithm),

    /// Reader key material is unusable
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Decoded ciphertext exceeds the configured limit
    #[error("Payload too large: {size} bytes (max {max})")]
    PayloadTooLarge {
        /// Decoded ciphertext size
        size: usize,
        /// Configured maximum
        max: usize,
    },

    /// Document carries no encrypted payload
    #[error("Document has no encrypted payload")]
    MissingEncryptedPayload,

    /// Document JSON could not be parsed
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The document source failed
    #[error("Document source error: {0}")]
    Source(String),

    /// Configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DecryptionError {
    /// Stable label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedCipher(_) => "unsupported_cipher",
            Self::NotAReadingKey { .. } => "not_a_reading_key",
            Self::NoPrivateKey => "no_private_key",
            Self::DecryptionFailed => "decryption_failed",
            Self::InvalidEncoding { .. } => "invalid_encoding",
            Self::InvalidIv(_) => "invalid_iv",
            Self::InvalidCiphertext(_) => "invalid_ciphertext",
            Self::InvalidKeyLength(_) => "invalid_key_length",
            Self::InvalidPadding => "invalid_padding",
            Self::MalformedTag(_) => "malformed_tag",
            Self::UnsupportedKeyAlgorithm(_) => "unsupported_key_algorithm",
            Self::InvalidKeyMaterial(_) => "invalid_key_material",
            Self::PayloadTooLarge { .. } => "payload_too_large",
            Self::MissingEncryptedPayload => "missing_encrypted_payload",
            Self::InvalidDocument(_) => "invalid_document",
            Self::Source(_) => "source",
            Self::InvalidConfig(_) => "invalid_config",
        }
    }
}

impl From<KeyError> for DecryptionError {
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::UnsupportedKeyAlgorithm(algorithm) => Self::UnsupportedKeyAlgorithm(algorithm),
            KeyError::NoPrivateKey => Self::NoPrivateKey,
            KeyError::DecryptionFailed => Self::DecryptionFailed,
            KeyError::InvalidKeyMaterial(reason) => Self::InvalidKeyMaterial(reason),
            KeyError::Tag(tag) => Self::InvalidKeyMaterial(tag.to_string()),
        }
    }
}

impl From<CryptoError> for DecryptionError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidKeyLength(len) => Self::InvalidKeyLength(len),
            CryptoError::InvalidIv(len) => Self::InvalidIv(len),
            CryptoError::InvalidCiphertext(len) => Self::InvalidCiphertext(len),
            CryptoError::InvalidPadding => Self::InvalidPadding,
        }
    }
}
