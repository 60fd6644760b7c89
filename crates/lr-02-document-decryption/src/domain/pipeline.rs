//! # Decryption Pipeline
//!
//! ```text
//! validate cipher -> locate entry -> decode fields -> unwrap IV, key
//!   -> AES-CBC -> strip padding -> read string tag
//! ```
//!
//! The path is linear and every failure is terminal. Decoded and unwrapped
//! buffers are [`SecretBytes`] and are zeroed when they go out of scope, on the
//! error paths as well.
//!
//! ## Known Limitations
//!
//! - **No integrity**: CBC carries no authentication tag. A modified ciphertext
//!   that still parses as a string tag is returned without error.
//! - **Zero padding is lossy**: content ending in `0x00` loses those bytes.
//!   Kept for compatibility with existing documents.

use super::config::DecryptionConfig;
use super::envelope::Envelope;
use super::errors::DecryptionError;
use lr_01_reader_keys::ReaderKey;
use shared_crypto::{decrypt_aes_cbc, SecretBytes};
use shared_types::protocol::{AES256_CIPHER, AES_BLOCK_SIZE};
use shared_types::tags::read_std_string_tag;
use tracing::{debug, warn};

/// Stateless document decryption pipeline.
#[derive(Clone, Debug, Default)]
pub struct DecryptionPipeline {
    config: DecryptionConfig,
}

impl DecryptionPipeline {
    /// Create a pipeline with a validated configuration.
    pub fn new(config: DecryptionConfig) -> Result<Self, DecryptionError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &DecryptionConfig {
        &self.config
    }

    /// Decrypt `envelope` with `reader`.
    ///
    /// # Errors
    ///
    /// - `UnsupportedCipher` before any key material is touched
    /// - `NotAReadingKey` when no entry matches the reader's public key hash
    /// - `InvalidEncoding` for malformed base64 in any field
    /// - `NoPrivateKey` / `DecryptionFailed` from the unwrap step
    /// - `InvalidKeyLength` / `InvalidIv` / `InvalidCiphertext` from AES-CBC
    /// - `MalformedTag` when the plaintext is not a string tag
    pub fn decrypt<R>(&self, reader: &R, envelope: &Envelope) -> Result<String, DecryptionError>
    where
        R: ReaderKey + ?Sized,
    {
        if envelope.cipher_algorithm != AES256_CIPHER {
            return Err(DecryptionError::UnsupportedCipher(
                envelope.cipher_algorithm.clone(),
            ));
        }

        let public_key_hash = reader.public_key_hash();
        let entry = envelope.find_entry(public_key_hash).ok_or_else(|| {
            warn!(
                public_key_hash,
                recipients = envelope.entries.len(),
                "No reading key entry for reader"
            );
            DecryptionError::NotAReadingKey {
                public_key_hash: public_key_hash.to_string(),
            }
        })?;
        debug!(
            public_key_hash,
            recipients = envelope.entries.len(),
            "Reading key entry located"
        );

        let wrapped_iv = Envelope::decode("encryptedIV", &entry.wrapped_iv)?;
        let wrapped_key = Envelope::decode("encryptedKey", &entry.wrapped_key)?;
        let cipher_text = Envelope::decode("cipherText", &envelope.cipher_text)?;
        if cipher_text.len() > self.config.max_cipher_text_bytes {
            return Err(DecryptionError::PayloadTooLarge {
                size: cipher_text.len(),
                max: self.config.max_cipher_text_bytes,
            });
        }

        let iv = reader.unwrap(&wrapped_iv)?;
        let key = reader.unwrap(&wrapped_key)?;
        debug!(
            key_len = key.len(),
            cipher_text_len = cipher_text.len(),
            "Key material unwrapped"
        );

        self.decrypt_payload(&key, &iv, &cipher_text)
    }

    /// Decrypt an AES-CBC payload with already unwrapped key material, strip
    /// the padding and read the string tag.
    pub fn decrypt_payload(
        &self,
        key: &[u8],
        iv: &[u8],
        cipher_text: &[u8],
    ) -> Result<String, DecryptionError> {
        let plain: SecretBytes = decrypt_aes_cbc(key, iv, cipher_text)?;
        let unpadded = self.config.padding.strip(AES_BLOCK_SIZE, &plain)?;
        let text = read_std_string_tag(unpadded)?;
        debug!(
            plain_len = plain.len(),
            text_len = text.len(),
            "Payload decrypted"
        );
        Ok(text)
    }
}
