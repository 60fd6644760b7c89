//! # Shared Types Crate
//!
//! This crate contains the wire-level definitions every subsystem agrees on:
//! protocol constants, the tag (TLV) codec, and the serde models of the
//! documents returned by a ledger node.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Literal headers and suffixes of the wire
//!   format live in [`protocol`] and nowhere else.
//! - **Self-Delimiting Tags**: Every serialized value is an `(id, length, payload)`
//!   tag whose integers use the variable-length `ILInt` encoding.
//! - **Read-Only Models**: Received documents are deserialized once and never
//!   mutated.

pub mod errors;
pub mod models;
pub mod protocol;
pub mod tags;

pub use errors::TagError;
pub use models::{EncryptedTextModel, JsonDocumentModel, ReadingKeyModel};
pub use tags::{TagId, TagReader};
