//! # PEM Key Source
//!
//! Parses reader key material from in-memory PEM text.
//!
//! | Label | Format | Algorithms |
//! |-------|--------|------------|
//! | `PRIVATE KEY` | PKCS#8 | RSA, Ed25519, secp256k1 (tried in that order) |
//! | `RSA PRIVATE KEY` | PKCS#1 | RSA |
//! | `EC PRIVATE KEY` | SEC1 | secp256k1 |
//! | `PUBLIC KEY` | SPKI | RSA, Ed25519, secp256k1 |
//! | `RSA PUBLIC KEY` | PKCS#1 | RSA |
//!
//! Reading files is left to the caller.

use crate::domain::errors::KeyError;
use crate::domain::keys::{KeyPair, PrivateKey, PublicKey};
use crate::ports::outbound::KeyMaterialSource;
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;
use zeroize::Zeroizing;

const PEM_BEGIN: &str = "-----BEGIN ";
const PEM_DASHES: &str = "-----";

/// Key material held as PEM text.
#[derive(Clone, Default)]
pub struct PemKeySource {
    private_pem: Option<Zeroizing<String>>,
    public_pem: Option<String>,
}

impl PemKeySource {
    /// Source backed by a private key; the public key is derived from it.
    pub fn from_private_pem(pem: impl Into<String>) -> Self {
        Self {
            private_pem: Some(Zeroizing::new(pem.into())),
            public_pem: None,
        }
    }

    /// Source backed by a public key only.
    pub fn from_public_pem(pem: impl Into<String>) -> Self {
        Self {
            private_pem: None,
            public_pem: Some(pem.into()),
        }
    }

    /// Use an explicit public key instead of deriving it.
    pub fn with_public_pem(mut self, pem: impl Into<String>) -> Self {
        self.public_pem = Some(pem.into());
        self
    }
}

impl std::fmt::Debug for PemKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PemKeySource")
            .field("has_private_pem", &self.private_pem.is_some())
            .field("has_public_pem", &self.public_pem.is_some())
            .finish()
    }
}

impl KeyMaterialSource for PemKeySource {
    fn load_key_pair(&self) -> Result<KeyPair, KeyError> {
        let private = self
            .private_pem
            .as_deref()
            .map(|pem| parse_private_key_pem(pem))
            .transpose()?;
        let public = self
            .public_pem
            .as_deref()
            .map(parse_public_key_pem)
            .transpose()?;

        match (public, private) {
            (Some(public), private) => {
                if let Some(private) = &private {
                    if private.public_key() != public {
                        return Err(invalid("public key does not match private key"));
                    }
                }
                Ok(KeyPair::new(public, private))
            }
            (None, Some(private)) => Ok(KeyPair::from_private(private)),
            (None, None) => Err(invalid("no key material configured")),
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse a private key PEM block.
pub fn parse_private_key_pem(pem: &str) -> Result<PrivateKey, KeyError> {
    let label = pem_label(pem)?;
    debug!(label, "Parsing private key PEM");

    match label {
        "PRIVATE KEY" => parse_pkcs8_private_key(pem),
        "RSA PRIVATE KEY" => {
            <RsaPrivateKey as rsa::pkcs1::DecodeRsaPrivateKey>::from_pkcs1_pem(pem)
                .map(PrivateKey::Rsa)
                .map_err(|e| invalid(&e.to_string()))
        }
        "EC PRIVATE KEY" => k256::SecretKey::from_sec1_pem(pem)
            .map(PrivateKey::Ecdsa)
            .map_err(|e| invalid(&e.to_string())),
        other => Err(invalid(&format!("unsupported private key PEM label: {other}"))),
    }
}

fn parse_pkcs8_private_key(pem: &str) -> Result<PrivateKey, KeyError> {
    if let Ok(key) = <RsaPrivateKey as rsa::pkcs8::DecodePrivateKey>::from_pkcs8_pem(pem) {
        return Ok(PrivateKey::Rsa(key));
    }
    if let Ok(key) =
        <ed25519_dalek::SigningKey as ed25519_dalek::pkcs8::DecodePrivateKey>::from_pkcs8_pem(pem)
    {
        return Ok(PrivateKey::EdDsa(key));
    }
    <k256::SecretKey as k256::pkcs8::DecodePrivateKey>::from_pkcs8_pem(pem)
        .map(PrivateKey::Ecdsa)
        .map_err(|_| invalid("PKCS#8 key is not RSA, Ed25519 or secp256k1"))
}

/// Parse a public key PEM block.
pub fn parse_public_key_pem(pem: &str) -> Result<PublicKey, KeyError> {
    match pem_label(pem)? {
        "PUBLIC KEY" => parse_spki_public_key(pem),
        "RSA PUBLIC KEY" => {
            <RsaPublicKey as rsa::pkcs1::DecodeRsaPublicKey>::from_pkcs1_pem(pem)
                .map(PublicKey::Rsa)
                .map_err(|e| invalid(&e.to_string()))
        }
        other => Err(invalid(&format!("unsupported public key PEM label: {other}"))),
    }
}

fn parse_spki_public_key(pem: &str) -> Result<PublicKey, KeyError> {
    if let Ok(key) = <RsaPublicKey as rsa::pkcs8::DecodePublicKey>::from_public_key_pem(pem) {
        return Ok(PublicKey::Rsa(key));
    }
    if let Ok(key) =
        <ed25519_dalek::VerifyingKey as ed25519_dalek::pkcs8::DecodePublicKey>::from_public_key_pem(
            pem,
        )
    {
        return Ok(PublicKey::EdDsa(key));
    }
    <k256::PublicKey as k256::pkcs8::DecodePublicKey>::from_public_key_pem(pem)
        .map(PublicKey::Ecdsa)
        .map_err(|_| invalid("SPKI key is not RSA, Ed25519 or secp256k1"))
}

fn pem_label(pem: &str) -> Result<&str, KeyError> {
    let start = pem
        .find(PEM_BEGIN)
        .ok_or_else(|| invalid("missing PEM header"))?
        + PEM_BEGIN.len();
    let rest = &pem[start..];
    let end = rest
        .find(PEM_DASHES)
        .ok_or_else(|| invalid("unterminated PEM header"))?;
    Ok(&rest[..end])
}

fn invalid(reason: &str) -> KeyError {
    KeyError::InvalidKeyMaterial(reason.to_string())
}
