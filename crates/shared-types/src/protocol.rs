//! # Protocol Constants
//!
//! Fixed literals of the ledger wire format. These are protocol constants,
//! not configuration: the key encoder and the identity derivation both read
//! them from here so the two paths cannot drift apart.

/// Header prepended to the textual form of an encoded public key.
pub const PUBLIC_KEY_HEADER: &str = "PubKey!";

/// Prefix of a reader identifier.
pub const READER_ID_PREFIX: &str = "Key!";

/// Suffix of a SHA-256 based public key hash.
pub const SHA256_SUFFIX: &str = "#SHA256";

/// Suffix of a SHA-1 based reader identifier.
pub const SHA1_SUFFIX: &str = "#SHA1";

/// Algorithm suffix of an encoded RSA public key.
pub const RSA_KEY_SUFFIX: &str = "#RSA";

/// The only cipher name accepted in an encrypted envelope.
pub const AES256_CIPHER: &str = "AES256";

/// AES block size in bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// Standard byte-array tag.
pub const TAG_STD_BYTES: u64 = 16;

/// Standard UTF-8 string tag.
pub const TAG_STD_STRING: u64 = 17;

/// Sequence tag that wraps the modulus and exponent of an RSA public key.
pub const TAG_RSA_PUBLIC_KEY: u64 = 40;

/// First tag id that carries an explicit length. Lower ids are implicit.
pub const FIRST_EXPLICIT_TAG: u64 = 16;
