//! # Standard Reader Key
//!
//! The production `ReaderKey`: holds a key pair, caches the public key hash at
//! construction and unwraps key material with the private half.

use crate::domain::codec::{self, EncodedPublicKey};
use crate::domain::errors::KeyError;
use crate::domain::keys::{KeyPair, PrivateKey, PublicKey};
use crate::domain::unwrap::unwrap_with;
use crate::ports::inbound::ReaderKey;
use crate::ports::outbound::KeyMaterialSource;
use shared_crypto::SecretBytes;
use tracing::debug;

/// Reader key backed by an algorithm-tagged key pair.
#[derive(Clone, Debug)]
pub struct StandardReaderKey {
    public_key: PublicKey,
    private_key: Option<PrivateKey>,
    public_key_hash: String,
}

impl StandardReaderKey {
    /// Create a reader key from a public key and an optional private key.
    ///
    /// # Errors
    /// `KeyError::UnsupportedKeyAlgorithm` if the public key cannot be hashed.
    pub fn create(public_key: PublicKey, private_key: Option<PrivateKey>) -> Result<Self, KeyError> {
        let public_key_hash = codec::public_key_hash(&public_key)?;
        debug!(
            public_key_hash = %public_key_hash,
            has_private_key = private_key.is_some(),
            "Reader key created"
        );
        Ok(Self {
            public_key,
            private_key,
            public_key_hash,
        })
    }

    /// Create a reader key from a private key, deriving the public key.
    pub fn from_private_key(private_key: PrivateKey) -> Result<Self, KeyError> {
        let public_key = private_key.public_key();
        Self::create(public_key, Some(private_key))
    }

    /// Create a reader key from a loaded key pair.
    pub fn from_key_pair(pair: KeyPair) -> Result<Self, KeyError> {
        Self::create(pair.public, pair.private)
    }

    /// Load the key pair from `source` and create a reader key from it.
    pub fn load(source: &impl KeyMaterialSource) -> Result<Self, KeyError> {
        Self::from_key_pair(source.load_key_pair()?)
    }
}

impl ReaderKey for StandardReaderKey {
    fn public_key_hash(&self) -> &str {
        &self.public_key_hash
    }

    fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    fn encoded_public_key(&self) -> Result<EncodedPublicKey, KeyError> {
        codec::encode_wire_form(&self.public_key)
    }

    fn unwrap(&self, wrapped: &[u8]) -> Result<SecretBytes, KeyError> {
        let private_key = self.private_key.as_ref().ok_or(KeyError::NoPrivateKey)?;
        unwrap_with(private_key, wrapped)
    }

    fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }
}
