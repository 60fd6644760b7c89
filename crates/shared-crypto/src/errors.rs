//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// AES key is not 16, 24 or 32 bytes long
    #[error("Invalid key length: {0} bytes")]
    InvalidKeyLength(usize),

    /// IV is not a single cipher block
    #[error("Invalid IV length: {0} bytes")]
    InvalidIv(usize),

    /// Ciphertext is not a whole number of blocks
    #[error("Invalid ciphertext length: {0} bytes")]
    InvalidCiphertext(usize),

    /// Padding bytes do not describe a valid pad
    #[error("Invalid message padding")]
    InvalidPadding,
}
