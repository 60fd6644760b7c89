//! # Padding Removal
//!
//! Documents on the ledger are zero-padded to the AES block size before
//! encryption. Removing that padding drops every trailing `0x00` byte, so a
//! plaintext that legitimately ends in zero bytes loses them. The behaviour is
//! kept byte-for-byte for compatibility with existing documents.
//!
//! ISO 10126 removal is also provided. It covers PKCS#5, PKCS#7 and
//! ANSI X9.23 padding, which are special cases of it.

use crate::CryptoError;
use serde::{Deserialize, Serialize};

/// Padding scheme applied before encryption.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingScheme {
    /// Trailing zero bytes (ledger default)
    #[default]
    Zero,
    /// Last byte holds the pad length
    Iso10126,
}

impl PaddingScheme {
    /// Strip the padding from `plain` and return the content prefix.
    pub fn strip<'a>(&self, block_size: usize, plain: &'a [u8]) -> Result<&'a [u8], CryptoError> {
        match self {
            Self::Zero => Ok(strip_zero_padding(plain)),
            Self::Iso10126 => strip_iso10126_padding(block_size, plain),
        }
    }
}

/// Drop every trailing `0x00` byte.
pub fn strip_zero_padding(plain: &[u8]) -> &[u8] {
    let end = plain
        .iter()
        .rposition(|b| *b != 0)
        .map_or(0, |last| last + 1);
    &plain[..end]
}

/// Remove ISO 10126 padding: the last byte is the pad length in `1..=block_size`.
pub fn strip_iso10126_padding(block_size: usize, plain: &[u8]) -> Result<&[u8], CryptoError> {
    let pad = usize::from(*plain.last().ok_or(CryptoError::InvalidPadding)?);
    if pad == 0 || pad > block_size || pad > plain.len() {
        return Err(CryptoError::InvalidPadding);
    }
    Ok(&plain[..plain.len() - pad])
}
