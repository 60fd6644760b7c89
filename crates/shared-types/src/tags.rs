//! # Tag (TLV) Codec
//!
//! Self-delimiting `(id, length, payload)` tags used for the canonical key
//! encoding and for the string payload of encrypted documents.
//!
//! ## ILInt
//!
//! Ids and lengths are `ILInt` values. A value below `0xF8` is a single byte.
//! Larger values store `value - 0xF8` big-endian in the minimum number `n` of
//! bytes (1 to 8), preceded by the header byte `0xF7 + n`.
//!
//! ## Explicit Tags
//!
//! ```text
//! [ ilint(id) ][ ilint(len) ][ payload: len bytes ]
//! ```
//!
//! A sequence tag's payload is the plain concatenation of its children; the
//! length alone delimits them.

use crate::errors::TagError;
use crate::protocol::{FIRST_EXPLICIT_TAG, TAG_STD_BYTES, TAG_STD_STRING};

/// Tag identifier.
pub type TagId = u64;

const ILINT_BASE: u64 = 0xF8;

// =============================================================================
// ILINT
// =============================================================================

/// Number of bytes `encode_ilint` writes for `value`.
pub fn ilint_size(value: u64) -> usize {
    if value < ILINT_BASE {
        1
    } else {
        1 + significant_bytes(value - ILINT_BASE)
    }
}

fn significant_bytes(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(8).max(1)
}

/// Append the `ILInt` encoding of `value` to `out`.
pub fn encode_ilint(value: u64, out: &mut Vec<u8>) {
    if value < ILINT_BASE {
        out.push(value as u8);
        return;
    }
    let offset = value - ILINT_BASE;
    let n = significant_bytes(offset);
    out.push(0xF7 + n as u8);
    out.extend_from_slice(&offset.to_be_bytes()[8 - n..]);
}

/// Decode an `ILInt` from the start of `buf`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode_ilint(buf: &[u8]) -> Result<(u64, usize), TagError> {
    let first = *buf.first().ok_or(TagError::Truncated)?;
    if u64::from(first) < ILINT_BASE {
        return Ok((u64::from(first), 1));
    }

    let n = usize::from(first - 0xF7);
    let body = buf.get(1..=n).ok_or(TagError::Truncated)?;
    let offset = body
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
    let value = offset
        .checked_add(ILINT_BASE)
        .ok_or(TagError::IlintOverflow)?;
    Ok((value, 1 + n))
}

// =============================================================================
// WRITING
// =============================================================================

/// Append an explicit tag to `out`.
pub fn write_tag(out: &mut Vec<u8>, id: TagId, payload: &[u8]) {
    encode_ilint(id, out);
    encode_ilint(payload.len() as u64, out);
    out.extend_from_slice(payload);
}

/// Encode a standard byte-array tag.
pub fn bytes_tag(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(tag_size(TAG_STD_BYTES, payload.len()));
    write_tag(&mut out, TAG_STD_BYTES, payload);
    out
}

/// Encode a standard string tag.
pub fn string_tag(value: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(tag_size(TAG_STD_STRING, value.len()));
    write_tag(&mut out, TAG_STD_STRING, value.as_bytes());
    out
}

/// Encode a sequence tag whose payload is the concatenation of `children`.
///
/// Each child must already be a complete tag encoding.
pub fn sequence_tag(id: TagId, children: &[&[u8]]) -> Vec<u8> {
    let payload_len: usize = children.iter().map(|c| c.len()).sum();
    let mut out = Vec::with_capacity(tag_size(id, payload_len));
    encode_ilint(id, &mut out);
    encode_ilint(payload_len as u64, &mut out);
    for child in children {
        out.extend_from_slice(child);
    }
    out
}

fn tag_size(id: TagId, payload_len: usize) -> usize {
    ilint_size(id) + ilint_size(payload_len as u64) + payload_len
}

// =============================================================================
// READING
// =============================================================================

/// Sequential reader over a buffer of explicit tags.
#[derive(Debug, Clone)]
pub struct TagReader<'a> {
    buf: &'a [u8],
}

impl<'a> TagReader<'a> {
    /// Create a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Bytes not consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        self.buf
    }

    /// True when every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Read the next explicit tag, returning its id and payload.
    pub fn read_tag(&mut self) -> Result<(TagId, &'a [u8]), TagError> {
        let (id, id_len) = decode_ilint(self.buf)?;
        if id < FIRST_EXPLICIT_TAG {
            return Err(TagError::ImplicitTag(id));
        }
        let payload = self.read_payload(id_len)?;
        Ok((id, payload))
    }

    /// Read the next tag and require it to carry `expected` as its id.
    pub fn expect_tag(&mut self, expected: TagId) -> Result<&'a [u8], TagError> {
        let (id, id_len) = decode_ilint(self.buf)?;
        if id != expected {
            return Err(TagError::UnexpectedTagId {
                expected,
                actual: id,
            });
        }
        if id < FIRST_EXPLICIT_TAG {
            return Err(TagError::ImplicitTag(id));
        }
        self.read_payload(id_len)
    }

    /// Read a standard string tag.
    pub fn read_std_string(&mut self) -> Result<String, TagError> {
        let payload = self.expect_tag(TAG_STD_STRING)?;
        std::str::from_utf8(payload)
            .map(str::to_owned)
            .map_err(|_| TagError::InvalidUtf8)
    }

    fn read_payload(&mut self, header_len: usize) -> Result<&'a [u8], TagError> {
        let rest = &self.buf[header_len..];
        let (declared, len_len) = decode_ilint(rest)?;
        let rest = &rest[len_len..];
        if declared > rest.len() as u64 {
            return Err(TagError::LengthExceedsBuffer {
                declared,
                available: rest.len(),
            });
        }
        let (payload, tail) = rest.split_at(declared as usize);
        self.buf = tail;
        Ok(payload)
    }
}

/// Deserialize a single standard string tag from the start of `buf`.
///
/// Bytes after the tag are ignored.
pub fn read_std_string_tag(buf: &[u8]) -> Result<String, TagError> {
    TagReader::new(buf).read_std_string()
}
