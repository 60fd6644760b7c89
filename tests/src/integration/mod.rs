//! # Integration Tests
//!
//! Cross-crate scenarios over fixed keys and vectors.

pub mod end_to_end;
pub mod key_identity;
