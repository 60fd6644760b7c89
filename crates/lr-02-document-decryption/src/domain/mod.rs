//! # Domain Layer
//!
//! Envelope model, the decryption pipeline and its configuration.

pub mod config;
pub mod envelope;
pub mod errors;
pub mod pipeline;
