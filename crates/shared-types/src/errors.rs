//! # Error Types
//!
//! Errors raised while reading tag-encoded data.

use thiserror::Error;

/// Errors that can occur while decoding tags and `ILInt` values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagError {
    /// The buffer ended before a complete header or value was read.
    #[error("Truncated tag data")]
    Truncated,

    /// An `ILInt` value does not fit in 64 bits.
    #[error("ILInt value overflows u64")]
    IlintOverflow,

    /// The declared payload length is larger than the remaining buffer.
    #[error("Tag length {declared} exceeds the {available} bytes available")]
    LengthExceedsBuffer { declared: u64, available: usize },

    /// The tag id is not the one the reader expected.
    #[error("Unexpected tag id: expected {expected}, got {actual}")]
    UnexpectedTagId { expected: u64, actual: u64 },

    /// Implicit tags carry no length and are not handled by this codec.
    #[error("Implicit tag {0} is not supported here")]
    ImplicitTag(u64),

    /// A string tag payload is not valid UTF-8.
    #[error("String tag payload is not valid UTF-8")]
    InvalidUtf8,
}
