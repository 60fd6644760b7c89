//! # Document Models
//!
//! serde models of the JSON documents a ledger node returns. They mirror the
//! node's camelCase field names and ignore fields this client does not use.

use serde::{Deserialize, Serialize};

/// One wrapped-key entry of an encrypted text, addressed to a single reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingKeyModel {
    /// Public key hash of the reader this entry is addressed to.
    #[serde(default)]
    pub public_key_hash: String,
    /// Base64 of the RSA-wrapped symmetric key.
    #[serde(default)]
    pub encrypted_key: String,
    /// Base64 of the RSA-wrapped IV.
    #[serde(rename = "encryptedIV", default)]
    pub encrypted_iv: String,
    /// Reader identifier, when the node reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reader_id: Option<String>,
}

/// An encrypted text: one ciphertext plus one reading key per reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedTextModel {
    /// Cipher name. Only `AES256` is understood.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cipher: Option<String>,
    /// Base64 of the symmetric ciphertext.
    #[serde(default)]
    pub cipher_text: String,
    /// Reading keys, in the order the node sent them.
    #[serde(default)]
    pub reading_keys: Vec<ReadingKeyModel>,
}

impl EncryptedTextModel {
    /// Find the reading key addressed to `public_key_hash`.
    pub fn find_reading_key(&self, public_key_hash: &str) -> Option<&ReadingKeyModel> {
        self.reading_keys
            .iter()
            .find(|k| k.public_key_hash == public_key_hash)
    }
}

/// A JSON document record as returned by the node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonDocumentModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<i64>,
    /// Chain unique id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
    /// Universal record reference in the form `network:chain@serial`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_tag_id: Option<i64>,
    /// Encrypted body of the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_json: Option<EncryptedTextModel>,
    /// Plain body, when the node chose to return one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_text: Option<String>,
}
