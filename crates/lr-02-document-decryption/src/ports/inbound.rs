//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::envelope::Envelope;
use crate::domain::errors::DecryptionError;
use shared_types::JsonDocumentModel;

/// Primary document decryption API.
///
/// Implementations are bound to one reader key and must be thread-safe
/// (`Send + Sync`).
pub trait DocumentDecryptionApi: Send + Sync {
    /// Public key hash of the reader key in use.
    fn reader_key_hash(&self) -> &str;

    /// Whether `envelope` carries an entry for this reader.
    fn can_read(&self, envelope: &Envelope) -> bool;

    /// Decrypt an envelope to its plaintext string.
    fn decrypt_envelope(&self, envelope: &Envelope) -> Result<String, DecryptionError>;

    /// Decrypt the encrypted body of a document record.
    ///
    /// # Errors
    /// `DecryptionError::MissingEncryptedPayload` when the record has no
    /// encrypted body, otherwise as [`Self::decrypt_envelope`].
    fn decrypt_document(&self, document: &JsonDocumentModel) -> Result<String, DecryptionError>;

    /// Parse a document record from JSON and decrypt it.
    fn decrypt_document_json(&self, json: &str) -> Result<String, DecryptionError>;
}
