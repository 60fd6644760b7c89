//! # Envelope
//!
//! One symmetrically encrypted payload plus one wrapped key/IV entry per
//! authorized reader. Built from the received document model and read once.

use super::errors::DecryptionError;
use shared_crypto::{decode_base64, SecretBytes};
use shared_types::{EncryptedTextModel, ReadingKeyModel};

/// Key material wrapped for a single recipient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrappedKeyEntry {
    /// Public key hash of the recipient
    pub recipient_hash: String,
    /// Base64 of the RSA-wrapped AES key
    pub wrapped_key: String,
    /// Base64 of the RSA-wrapped AES IV
    pub wrapped_iv: String,
    /// Reader id of the recipient, when the node sends it
    pub reader_id: Option<String>,
}

impl From<ReadingKeyModel> for WrappedKeyEntry {
    fn from(model: ReadingKeyModel) -> Self {
        Self {
            recipient_hash: model.public_key_hash,
            wrapped_key: model.encrypted_key,
            wrapped_iv: model.encrypted_iv,
            reader_id: model.reader_id,
        }
    }
}

/// Ciphertext with its per-recipient wrapped keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// Declared cipher (only `AES256` is supported)
    pub cipher_algorithm: String,
    /// Base64 of the AES-CBC ciphertext
    pub cipher_text: String,
    /// Recipient entries in received order
    pub entries: Vec<WrappedKeyEntry>,
}

impl Envelope {
    /// Create an envelope.
    pub fn new(
        cipher_algorithm: impl Into<String>,
        cipher_text: impl Into<String>,
        entries: Vec<WrappedKeyEntry>,
    ) -> Self {
        Self {
            cipher_algorithm: cipher_algorithm.into(),
            cipher_text: cipher_text.into(),
            entries,
        }
    }

    /// First entry addressed to `recipient_hash`, if any.
    ///
    /// Absence is a normal outcome: the reader simply cannot read this document.
    pub fn find_entry(&self, recipient_hash: &str) -> Option<&WrappedKeyEntry> {
        self.entries
            .iter()
            .find(|entry| entry.recipient_hash == recipient_hash)
    }

    /// Decode a standard base64 field into a zeroizing buffer.
    pub fn decode(field: &'static str, value: &str) -> Result<SecretBytes, DecryptionError> {
        decode_base64(value).map_err(|_| DecryptionError::InvalidEncoding { field })
    }
}

impl From<EncryptedTextModel> for Envelope {
    fn from(model: EncryptedTextModel) -> Self {
        Self {
            cipher_algorithm: model.cipher.unwrap_or_default(),
            cipher_text: model.cipher_text,
            entries: model.reading_keys.into_iter().map(Into::into).collect(),
        }
    }
}
