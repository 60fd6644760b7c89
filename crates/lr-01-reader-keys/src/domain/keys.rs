//! # Key Model
//!
//! Algorithm-tagged public and private keys.
//!
//! Only RSA keys can be encoded and used for unwrapping today. ECDSA
//! (secp256k1) and Ed25519 keys can still be loaded and carried around so
//! callers get a precise `UnsupportedKeyAlgorithm` instead of a parse error.

use std::fmt;

// =============================================================================
// Algorithm
// =============================================================================

/// Key algorithm family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    /// RSA (PKCS#1 / PKCS#8)
    Rsa,
    /// ECDSA over secp256k1
    Ecdsa,
    /// EdDSA over Ed25519
    EdDsa,
}

impl KeyAlgorithm {
    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rsa => "RSA",
            Self::Ecdsa => "ECDSA",
            Self::EdDsa => "EdDSA",
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Public / Private Keys
// =============================================================================

/// Public half of a reader key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    /// RSA modulus and exponent
    Rsa(rsa::RsaPublicKey),
    /// secp256k1 point
    Ecdsa(k256::PublicKey),
    /// Ed25519 point
    EdDsa(ed25519_dalek::VerifyingKey),
}

impl PublicKey {
    /// Algorithm of this key.
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            Self::Rsa(_) => KeyAlgorithm::Rsa,
            Self::Ecdsa(_) => KeyAlgorithm::Ecdsa,
            Self::EdDsa(_) => KeyAlgorithm::EdDsa,
        }
    }
}

impl From<rsa::RsaPublicKey> for PublicKey {
    fn from(key: rsa::RsaPublicKey) -> Self {
        Self::Rsa(key)
    }
}

/// Private half of a reader key.
///
/// Every variant zeroizes its secret on drop. `Debug` never prints key material.
#[derive(Clone)]
pub enum PrivateKey {
    /// RSA private key
    Rsa(rsa::RsaPrivateKey),
    /// secp256k1 scalar
    Ecdsa(k256::SecretKey),
    /// Ed25519 seed
    EdDsa(ed25519_dalek::SigningKey),
}

impl PrivateKey {
    /// Algorithm of this key.
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            Self::Rsa(_) => KeyAlgorithm::Rsa,
            Self::Ecdsa(_) => KeyAlgorithm::Ecdsa,
            Self::EdDsa(_) => KeyAlgorithm::EdDsa,
        }
    }

    /// Derive the matching public key.
    pub fn public_key(&self) -> PublicKey {
        match self {
            Self::Rsa(key) => PublicKey::Rsa(key.to_public_key()),
            Self::Ecdsa(key) => PublicKey::Ecdsa(key.public_key()),
            Self::EdDsa(key) => PublicKey::EdDsa(key.verifying_key()),
        }
    }
}

impl From<rsa::RsaPrivateKey> for PrivateKey {
    fn from(key: rsa::RsaPrivateKey) -> Self {
        Self::Rsa(key)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Key Pair
// =============================================================================

/// A public key with its optional private key, as handed over by the loader.
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// Public key (always present)
    pub public: PublicKey,
    /// Private key (absent for read-identity-only keys)
    pub private: Option<PrivateKey>,
}

impl KeyPair {
    /// Build a key pair from explicit halves.
    pub fn new(public: PublicKey, private: Option<PrivateKey>) -> Self {
        Self { public, private }
    }

    /// Build a key pair from a private key, deriving the public half.
    pub fn from_private(private: PrivateKey) -> Self {
        Self {
            public: private.public_key(),
            private: Some(private),
        }
    }

    /// Build a public-only key pair.
    pub fn public_only(public: PublicKey) -> Self {
        Self {
            public,
            private: None,
        }
    }
}
