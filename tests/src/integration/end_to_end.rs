//! # End-to-End Decryption
//!
//! Full envelope and document decryption with the fixture keys.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use lr_01_reader_keys::{PublicKey, ReaderKey, StandardReaderKey};
    use lr_02_document_decryption::{
        DecryptionConfig, DecryptionError, DecryptionPipeline, DocumentDecryptionApi,
        DocumentDecryptionService, Envelope, InMemoryDocumentSource, WrappedKeyEntry,
    };
    use shared_crypto::PaddingScheme;
    use shared_types::{JsonDocumentModel, TagError};

    fn decrypt(reader: &impl ReaderKey, envelope: &Envelope) -> Result<String, DecryptionError> {
        DecryptionPipeline::default().decrypt(reader, envelope)
    }

    #[test]
    fn test_hello_with_aes128() {
        assert_eq!(decrypt(&alice(), &shared_envelope(CT_128_HELLO)).unwrap(), "hello");
    }

    #[test]
    fn test_both_recipients_read_the_same_document() {
        let envelope = shared_envelope(CT_128_DOC);
        assert_eq!(decrypt(&alice(), &envelope).unwrap(), DOC_128_TEXT);
        assert_eq!(decrypt(&bob(), &envelope).unwrap(), DOC_128_TEXT);
    }

    #[test]
    fn test_hello_and_json_with_aes256() {
        assert_eq!(decrypt(&alice(), &alice_envelope_256(CT_256_HELLO)).unwrap(), "hello");
        assert_eq!(
            decrypt(&alice(), &alice_envelope_256(CT_256_JSON)).unwrap(),
            JSON_256_TEXT
        );
    }

    #[test]
    fn test_unwrapped_material_matches_vectors() {
        let alice = alice();
        let envelope = shared_envelope(CT_128_HELLO);
        let entry = envelope.find_entry(ALICE_HASH).unwrap();

        let key = alice
            .unwrap(&Envelope::decode("encryptedKey", &entry.wrapped_key).unwrap())
            .unwrap();
        let iv = alice
            .unwrap(&Envelope::decode("encryptedIV", &entry.wrapped_iv).unwrap())
            .unwrap();
        assert_eq!(hex::encode(&key[..]), KEY_128);
        assert_eq!(hex::encode(&iv[..]), IV_128);
    }

    #[test]
    fn test_not_a_reading_key() {
        let envelope = alice_envelope_256(CT_256_HELLO);
        assert!(envelope.find_entry(BOB_HASH).is_none());
        assert_eq!(
            decrypt(&bob(), &envelope),
            Err(DecryptionError::NotAReadingKey {
                public_key_hash: BOB_HASH.to_string()
            })
        );
    }

    #[test]
    fn test_entry_addressed_to_bob_but_wrapped_for_alice() {
        let mut envelope = alice_envelope_256(CT_256_HELLO);
        envelope.entries[0].recipient_hash = BOB_HASH.to_string();
        assert_eq!(decrypt(&bob(), &envelope), Err(DecryptionError::DecryptionFailed));
    }

    #[test]
    fn test_unsupported_cipher_names() {
        for cipher in ["DES", ""] {
            let mut envelope = shared_envelope(CT_128_HELLO);
            envelope.cipher_algorithm = cipher.to_string();
            assert_eq!(
                decrypt(&alice(), &envelope),
                Err(DecryptionError::UnsupportedCipher(cipher.to_string()))
            );
            // Even a key without a private half reports the cipher first
            assert_eq!(
                decrypt(&alice_public_only(), &envelope),
                Err(DecryptionError::UnsupportedCipher(cipher.to_string()))
            );
        }
    }

    #[test]
    fn test_public_only_reader() {
        let reader = alice_public_only();
        assert_eq!(reader.public_key_hash(), ALICE_HASH);
        assert_eq!(
            decrypt(&reader, &shared_envelope(CT_128_HELLO)),
            Err(DecryptionError::NoPrivateKey)
        );
    }

    #[test]
    fn test_zero_padding_limitation() {
        // "A\0" was encrypted, but the trailing zero is stripped with the padding
        // and the tag no longer fits.
        assert_eq!(
            decrypt(&alice(), &shared_envelope(CT_128_TRAILING_ZERO)),
            Err(DecryptionError::MalformedTag(TagError::LengthExceedsBuffer {
                declared: 2,
                available: 1
            }))
        );
    }

    #[test]
    fn test_iso10126_config_rejects_zero_padded_documents() {
        let pipeline =
            DecryptionPipeline::new(DecryptionConfig::default().with_padding(PaddingScheme::Iso10126))
                .unwrap();
        assert_eq!(
            pipeline.decrypt(&alice(), &shared_envelope(CT_128_HELLO)),
            Err(DecryptionError::InvalidPadding)
        );
    }

    #[test]
    fn test_truncated_cipher_text() {
        // 15 bytes: one short of a block
        let envelope = shared_envelope("MUEVOH2DWTSCMi7HqqQ4");
        assert_eq!(decrypt(&alice(), &envelope), Err(DecryptionError::InvalidCiphertext(15)));
    }

    #[test]
    fn test_document_service_flow() {
        let json = serde_json::json!({
            "applicationId": 8,
            "chainId": "chain-1",
            "reference": "net:chain-1@12",
            "serial": 12,
            "payloadTagId": 1000,
            "encryptedJson": {
                "cipher": "AES256",
                "cipherText": CT_128_DOC,
                "readingKeys": [
                    {"publicKeyHash": BOB_HASH, "encryptedKey": BOB_WRAPPED_KEY_128, "encryptedIV": BOB_WRAPPED_IV_128},
                    {"publicKeyHash": ALICE_HASH, "encryptedKey": ALICE_WRAPPED_KEY_128, "encryptedIV": ALICE_WRAPPED_IV_128, "readerId": ALICE_READER_ID}
                ]
            }
        })
        .to_string();

        let service = DocumentDecryptionService::new(alice());
        assert_eq!(service.reader_key_hash(), ALICE_HASH);
        assert_eq!(service.decrypt_document_json(&json).unwrap(), DOC_128_TEXT);

        let document: JsonDocumentModel = serde_json::from_str(&json).unwrap();
        let source = InMemoryDocumentSource::new();
        source.insert("net:chain-1@12", document).unwrap();
        let bob_service = DocumentDecryptionService::new(bob());
        assert_eq!(
            bob_service.read_document(&source, "net:chain-1@12").unwrap(),
            DOC_128_TEXT
        );
    }

    #[test]
    fn test_concurrent_readers() {
        let service = std::sync::Arc::new(DocumentDecryptionService::new(alice()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = std::sync::Arc::clone(&service);
                std::thread::spawn(move || {
                    service.decrypt_envelope(&shared_envelope(CT_128_HELLO))
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "hello");
        }
    }

    #[test]
    fn test_service_failures_are_counted_by_kind() {
        let _ = reader_telemetry::register_metrics();
        let service = DocumentDecryptionService::new(bob());
        let result = service.decrypt_envelope(&alice_envelope_256(CT_256_HELLO));
        assert!(matches!(result, Err(DecryptionError::NotAReadingKey { .. })));

        let text = reader_telemetry::encode_metrics().unwrap();
        assert!(text.contains("lr_decryption_failures_total"));
        assert!(text.contains("kind=\"not_a_reading_key\""));
    }

    fn seal_for(readers: &[&StandardReaderKey], key: &[u8], iv: &[u8], text: &str) -> Envelope {
        use aes::cipher::{block_padding::NoPadding, BlockEncryptMut, KeyIvInit};
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;
        use rsa::Oaep;

        let mut plain = vec![0x11, text.len() as u8];
        plain.extend_from_slice(text.as_bytes());
        plain.resize(plain.len().div_ceil(16) * 16, 0);
        let len = plain.len();
        cbc::Encryptor::<aes::Aes192>::new_from_slices(key, iv)
            .unwrap()
            .encrypt_padded_mut::<NoPadding>(&mut plain, len)
            .unwrap();

        let mut rng = rand::thread_rng();
        let entries = readers
            .iter()
            .map(|reader| {
                let PublicKey::Rsa(public) = reader.public_key() else {
                    panic!("fixture keys are RSA");
                };
                let mut wrap = |secret: &[u8]| {
                    STANDARD.encode(public.encrypt(&mut rng, Oaep::new::<sha1::Sha1>(), secret).unwrap())
                };
                WrappedKeyEntry {
                    recipient_hash: reader.public_key_hash().to_string(),
                    wrapped_key: wrap(key),
                    wrapped_iv: wrap(iv),
                    reader_id: None,
                }
            })
            .collect();
        Envelope::new("AES256", STANDARD.encode(&plain), entries)
    }

    #[test]
    fn test_freshly_sealed_aes192_envelope() {
        use rand::RngCore;

        let mut key = [0u8; 24];
        let mut iv = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut key);
        rand::thread_rng().fill_bytes(&mut iv);

        let (alice, bob) = (alice(), bob());
        let envelope = seal_for(&[&alice, &bob], &key, &iv, "quarterly figures");
        assert_eq!(decrypt(&alice, &envelope).unwrap(), "quarterly figures");
        assert_eq!(decrypt(&bob, &envelope).unwrap(), "quarterly figures");
    }
}
