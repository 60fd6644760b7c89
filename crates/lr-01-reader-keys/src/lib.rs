//! # Reader Keys Subsystem (LR-01)
//!
//! Key pairs that identify a reader of encrypted ledger documents and unwrap
//! the symmetric key material addressed to it.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): key model, canonical encoding, RSA-OAEP unwrap
//! - **Ports Layer** (`ports/`): `ReaderKey` capability and `KeyMaterialSource`
//! - **Adapters** (`adapters/`): PEM parsing
//! - **Service Layer** (`service.rs`): `StandardReaderKey`
//!
//! ## Security Notes
//!
//! - **Unwrap oracle**: every OAEP failure is reported as the same error
//! - **Secret lifetime**: unwrapped bytes are returned in zeroizing buffers
//! - **Algorithms**: only RSA keys can be encoded and unwrap; ECDSA and EdDSA
//!   keys load but fail with `UnsupportedKeyAlgorithm`

#![warn(missing_docs)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::pem::{parse_private_key_pem, parse_public_key_pem, PemKeySource};
pub use domain::codec::{
    decode_public_key, decode_wire_form, encode_public_key, encode_wire_form, public_key_hash,
    wire_suffix, EncodedPublicKey,
};
pub use domain::errors::KeyError;
pub use domain::keys::{KeyAlgorithm, KeyPair, PrivateKey, PublicKey};
pub use ports::inbound::ReaderKey;
pub use ports::outbound::KeyMaterialSource;
pub use service::StandardReaderKey;
