//! # Key Unwrapping
//!
//! Recovers a wrapped symmetric key or IV with the reader's private key.
//! RSA uses OAEP with SHA-1 for both the label hash and MGF1, and an empty label.
//! The private operation is always blinded.

use super::errors::KeyError;
use super::keys::PrivateKey;
use rsa::Oaep;
use sha1::Sha1;
use shared_crypto::SecretBytes;

/// Unwrap `wrapped` with `private_key`.
///
/// Every OAEP failure maps to `KeyError::DecryptionFailed`; a wrong key and a
/// corrupted blob are reported identically.
pub fn unwrap_with(private_key: &PrivateKey, wrapped: &[u8]) -> Result<SecretBytes, KeyError> {
    match private_key {
        PrivateKey::Rsa(key) => key
            .decrypt_blinded(&mut rand::thread_rng(), Oaep::new::<Sha1>(), wrapped)
            .map(SecretBytes::new)
            .map_err(|_| KeyError::DecryptionFailed),
        other => Err(KeyError::UnsupportedKeyAlgorithm(other.algorithm())),
    }
}
