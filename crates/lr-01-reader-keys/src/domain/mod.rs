//! # Domain Layer
//!
//! Key model, canonical public key encoding and RSA key unwrapping.
//! No I/O happens here.

pub mod codec;
pub mod errors;
pub mod keys;
pub mod unwrap;
