//! Base64 decoding of envelope fields into secret buffers.

use crate::SecretBytes;
use base64::engine::general_purpose::STANDARD;
use base64::{DecodeError, Engine};

/// Decode a standard, padded base64 field.
///
/// The decoded bytes may be wrapped key material, so they are returned in a
/// zeroizing buffer. The error carries no field name; callers attach one.
pub fn decode_base64(field: &str) -> Result<SecretBytes, DecodeError> {
    STANDARD.decode(field).map(SecretBytes::new)
}
