//! # Public Key Codec
//!
//! Canonical tag encoding of public keys and their textual wire form.
//!
//! ```text
//! RSA key:  tag(40, tag(16, n) || tag(16, e))     n, e big-endian, minimal
//! Wire:     "PubKey!" || base64url(encoding) || "#RSA"
//! ```
//!
//! The public key hash and the reader id are both computed over the canonical
//! encoding, never over the wire string.

use super::errors::KeyError;
use super::keys::PublicKey;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPublicKey};
use shared_crypto::KeyHasher;
use shared_types::protocol::{PUBLIC_KEY_HEADER, RSA_KEY_SUFFIX, TAG_RSA_PUBLIC_KEY, TAG_STD_BYTES};
use shared_types::tags::{bytes_tag, sequence_tag};
use shared_types::TagReader;

/// Wire form of a public key together with its reader id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedPublicKey {
    /// `PubKey!...#RSA` string
    pub wire: String,
    /// `Key!...#SHA1` id of the canonical encoding
    pub reader_id: String,
}

/// Canonical tag encoding of a public key.
pub fn encode_public_key(key: &PublicKey) -> Result<Vec<u8>, KeyError> {
    match key {
        PublicKey::Rsa(rsa) => Ok(encode_rsa_public_key(rsa)),
        other => Err(KeyError::UnsupportedKeyAlgorithm(other.algorithm())),
    }
}

fn encode_rsa_public_key(key: &RsaPublicKey) -> Vec<u8> {
    let modulus = bytes_tag(&key.n().to_bytes_be());
    let exponent = bytes_tag(&key.e().to_bytes_be());
    sequence_tag(TAG_RSA_PUBLIC_KEY, &[&modulus, &exponent])
}

/// Algorithm suffix of the wire form.
///
/// Only RSA has an assigned suffix; other algorithms fail rather than
/// producing an unmarked wire string.
pub fn wire_suffix(key: &PublicKey) -> Result<&'static str, KeyError> {
    match key {
        PublicKey::Rsa(_) => Ok(RSA_KEY_SUFFIX),
        other => Err(KeyError::UnsupportedKeyAlgorithm(other.algorithm())),
    }
}

/// Build the wire string and reader id of a public key.
pub fn encode_wire_form(key: &PublicKey) -> Result<EncodedPublicKey, KeyError> {
    let encoded = encode_public_key(key)?;
    let suffix = wire_suffix(key)?;

    let mut wire = String::from(PUBLIC_KEY_HEADER);
    URL_SAFE.encode_string(&encoded, &mut wire);
    wire.push_str(suffix);

    Ok(EncodedPublicKey {
        wire,
        reader_id: KeyHasher::new().reader_id(&encoded),
    })
}

/// Public key hash (`...#SHA256`) of a key.
pub fn public_key_hash(key: &PublicKey) -> Result<String, KeyError> {
    Ok(KeyHasher::new().hash(&encode_public_key(key)?))
}

/// Parse a canonical RSA key encoding.
///
/// Trailing bytes after the outer tag or after the exponent are rejected.
pub fn decode_public_key(encoded: &[u8]) -> Result<PublicKey, KeyError> {
    let mut outer = TagReader::new(encoded);
    let body = outer.expect_tag(TAG_RSA_PUBLIC_KEY)?;
    if !outer.is_empty() {
        return Err(KeyError::InvalidKeyMaterial(format!(
            "{} trailing bytes after key",
            outer.remaining().len()
        )));
    }

    let mut fields = TagReader::new(body);
    let n = BigUint::from_bytes_be(fields.expect_tag(TAG_STD_BYTES)?);
    let e = BigUint::from_bytes_be(fields.expect_tag(TAG_STD_BYTES)?);
    if !fields.is_empty() {
        return Err(KeyError::InvalidKeyMaterial(format!(
            "{} trailing bytes after exponent",
            fields.remaining().len()
        )));
    }

    RsaPublicKey::new(n, e)
        .map(PublicKey::Rsa)
        .map_err(|e| KeyError::InvalidKeyMaterial(e.to_string()))
}

/// Parse a `PubKey!...#RSA` wire string.
pub fn decode_wire_form(wire: &str) -> Result<PublicKey, KeyError> {
    let body = wire
        .strip_prefix(PUBLIC_KEY_HEADER)
        .and_then(|rest| rest.strip_suffix(RSA_KEY_SUFFIX))
        .ok_or_else(|| KeyError::InvalidKeyMaterial("not an RSA wire key".into()))?;
    let encoded = URL_SAFE
        .decode(body)
        .map_err(|e| KeyError::InvalidKeyMaterial(e.to_string()))?;
    decode_public_key(&encoded)
}
