//! # Inbound Ports (Driving Ports / API)
//!
//! The reader key capability consumed by the document decryption pipeline.

use crate::domain::codec::EncodedPublicKey;
use crate::domain::errors::KeyError;
use crate::domain::keys::PublicKey;
use shared_crypto::SecretBytes;

/// A key pair able to identify itself and unwrap key material addressed to it.
///
/// Implementations are immutable after construction and must be thread-safe
/// (`Send + Sync`).
pub trait ReaderKey: Send + Sync {
    /// Cached `...#SHA256` hash of the public key.
    fn public_key_hash(&self) -> &str;

    /// The public key.
    fn public_key(&self) -> &PublicKey;

    /// Wire form (`PubKey!...`) and reader id of the public key.
    fn encoded_public_key(&self) -> Result<EncodedPublicKey, KeyError>;

    /// Unwrap a key or IV wrapped for this reader.
    ///
    /// # Errors
    /// - `KeyError::NoPrivateKey` when only the public key is held
    /// - `KeyError::DecryptionFailed` on any OAEP failure
    fn unwrap(&self, wrapped: &[u8]) -> Result<SecretBytes, KeyError>;

    /// Whether a private key is held.
    fn has_private_key(&self) -> bool;
}
