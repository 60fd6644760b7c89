//! # Outbound Ports (Driven Ports / SPI)
//!
//! Where reader key material comes from. Certificate stores, PKCS#12 files and
//! similar loaders live outside this crate and plug in here.

use crate::domain::errors::KeyError;
use crate::domain::keys::KeyPair;

/// Source of the reader's key pair.
pub trait KeyMaterialSource: Send + Sync {
    /// Load the key pair.
    ///
    /// # Errors
    /// `KeyError::InvalidKeyMaterial` when the material cannot be parsed.
    fn load_key_pair(&self) -> Result<KeyPair, KeyError>;
}
