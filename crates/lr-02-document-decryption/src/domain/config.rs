//! # Decryption Configuration
//!
//! Limits and padding behaviour of the decryption pipeline.

use super::errors::DecryptionError;
use serde::{Deserialize, Serialize};
use shared_crypto::PaddingScheme;
use shared_types::protocol::AES_BLOCK_SIZE;

/// Default ceiling on decoded ciphertext size (16 MiB).
pub const DEFAULT_MAX_CIPHER_TEXT_BYTES: usize = 16 * 1024 * 1024;

/// Configuration of the decryption pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecryptionConfig {
    /// Largest decoded ciphertext accepted, in bytes
    pub max_cipher_text_bytes: usize,
    /// Padding removed after decryption
    pub padding: PaddingScheme,
}

impl Default for DecryptionConfig {
    fn default() -> Self {
        Self {
            max_cipher_text_bytes: DEFAULT_MAX_CIPHER_TEXT_BYTES,
            padding: PaddingScheme::Zero,
        }
    }
}

impl DecryptionConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), DecryptionError> {
        if self.max_cipher_text_bytes < AES_BLOCK_SIZE {
            return Err(DecryptionError::InvalidConfig(format!(
                "max_cipher_text_bytes must be at least {AES_BLOCK_SIZE}"
            )));
        }
        Ok(())
    }

    /// Set the ciphertext size limit.
    pub fn with_max_cipher_text_bytes(mut self, max: usize) -> Self {
        self.max_cipher_text_bytes = max;
        self
    }

    /// Set the padding scheme.
    pub fn with_padding(mut self, padding: PaddingScheme) -> Self {
        self.padding = padding;
        self
    }
}
