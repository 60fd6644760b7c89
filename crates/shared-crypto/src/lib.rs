//! # Shared Crypto - Reader-Side Cryptographic Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256, SHA-1 | Public key hashes, reader ids |
//! | `symmetric` | AES-CBC (128/192/256) | Document payload decryption |
//! | `padding` | Zero / ISO 10126 | Padding removal after decryption |
//! | `encoding` | Base64 (standard) | Envelope field decoding |
//!
//! ## Security Properties
//!
//! - **Secret lifetime**: every decrypted buffer is a [`SecretBytes`], zeroed
//!   when dropped on every exit path.
//! - **No integrity**: CBC decryption here carries no authentication tag.
//!   Tampered ciphertext is only caught if it no longer parses.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod errors;
pub mod hashing;
pub mod padding;
pub mod symmetric;

// Re-exports
pub use encoding::decode_base64;
pub use errors::CryptoError;
pub use hashing::{public_key_hash, reader_id, KeyHasher};
pub use padding::{strip_iso10126_padding, strip_zero_padding, PaddingScheme};
pub use symmetric::decrypt_aes_cbc;

/// Byte buffer that is zeroed when dropped.
pub type SecretBytes = zeroize::Zeroizing<Vec<u8>>;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
