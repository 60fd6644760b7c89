//! # Symmetric Decryption
//!
//! AES-CBC decryption of document payloads. The key length selects the AES
//! variant (16, 24 or 32 bytes); the IV must be exactly one block.
//!
//! ## Security Properties
//!
//! - **Confidentiality only**: CBC carries no authentication tag. A modified
//!   ciphertext decrypts to modified plaintext without any error here.
//! - **Secret lifetime**: the plaintext is returned as [`SecretBytes`].

use crate::{CryptoError, SecretBytes};
use aes::cipher::{block_padding::NoPadding, BlockDecryptMut, KeyIvInit};
use shared_types::protocol::AES_BLOCK_SIZE;

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes192CbcDec = cbc::Decryptor<aes::Aes192>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Decrypt `cipher_text` with AES-CBC.
///
/// The output has exactly the length of the ciphertext; padding is left in
/// place for the caller to remove.
///
/// # Errors
///
/// - `CryptoError::InvalidKeyLength` if the key is not 16, 24 or 32 bytes
/// - `CryptoError::InvalidIv` if the IV is not a single block
/// - `CryptoError::InvalidCiphertext` if the ciphertext is not whole blocks
pub fn decrypt_aes_cbc(key: &[u8], iv: &[u8], cipher_text: &[u8]) -> Result<SecretBytes, CryptoError> {
    if !matches!(key.len(), 16 | 24 | 32) {
        return Err(CryptoError::InvalidKeyLength(key.len()));
    }
    if iv.len() != AES_BLOCK_SIZE {
        return Err(CryptoError::InvalidIv(iv.len()));
    }
    if cipher_text.len() % AES_BLOCK_SIZE != 0 {
        return Err(CryptoError::InvalidCiphertext(cipher_text.len()));
    }

    let mut plain = SecretBytes::new(cipher_text.to_vec());
    let len = plain.len();
    let bad_iv = |_| CryptoError::InvalidIv(iv.len());
    let bad_text = |_| CryptoError::InvalidCiphertext(len);

    match key.len() {
        16 => Aes128CbcDec::new_from_slices(key, iv)
            .map_err(bad_iv)?
            .decrypt_padded_mut::<NoPadding>(&mut plain[..])
            .map_err(bad_text)?,
        24 => Aes192CbcDec::new_from_slices(key, iv)
            .map_err(bad_iv)?
            .decrypt_padded_mut::<NoPadding>(&mut plain[..])
            .map_err(bad_text)?,
        _ => Aes256CbcDec::new_from_slices(key, iv)
            .map_err(bad_iv)?
            .decrypt_padded_mut::<NoPadding>(&mut plain[..])
            .map_err(bad_text)?,
    };

    Ok(plain)
}
