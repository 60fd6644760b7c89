//! # Key Identity
//!
//! Public key hashes, reader ids and wire forms of the fixture keys, checked
//! against values computed by an independent implementation.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use lr_01_reader_keys::{
        decode_wire_form, parse_private_key_pem, parse_public_key_pem, KeyMaterialSource,
        PemKeySource, ReaderKey, StandardReaderKey,
    };
    use proptest::prelude::*;
    use shared_crypto::KeyHasher;

    #[test]
    fn test_alice_identifiers() {
        let alice = alice();
        assert_eq!(alice.public_key_hash(), ALICE_HASH);

        let encoded = alice.encoded_public_key().unwrap();
        assert_eq!(encoded.wire, ALICE_WIRE);
        assert_eq!(encoded.reader_id, ALICE_READER_ID);
    }

    #[test]
    fn test_bob_identifiers() {
        let bob = bob();
        assert_eq!(bob.public_key_hash(), BOB_HASH);
        assert_eq!(bob.encoded_public_key().unwrap().reader_id, BOB_READER_ID);
    }

    #[test]
    fn test_every_alice_encoding_agrees() {
        let from_pkcs1 =
            StandardReaderKey::from_private_key(parse_private_key_pem(ALICE_PKCS1_PEM).unwrap())
                .unwrap();
        let from_public =
            StandardReaderKey::create(parse_public_key_pem(ALICE_PUBLIC_PEM).unwrap(), None)
                .unwrap();

        assert_eq!(from_pkcs1.public_key_hash(), ALICE_HASH);
        assert_eq!(from_public.public_key_hash(), ALICE_HASH);
        assert!(from_pkcs1.has_private_key());
        assert!(!from_public.has_private_key());
    }

    #[test]
    fn test_wire_form_parses_back() {
        let public = decode_wire_form(ALICE_WIRE).unwrap();
        assert_eq!(&public, alice().public_key());
    }

    #[test]
    fn test_explicit_public_key_must_match() {
        let source = PemKeySource::from_private_pem(ALICE_PKCS8_PEM).with_public_pem(BOB_PUBLIC_PEM);
        assert!(source.load_key_pair().is_err());

        let source =
            PemKeySource::from_private_pem(ALICE_PKCS8_PEM).with_public_pem(ALICE_PUBLIC_PEM);
        assert!(source.load_key_pair().unwrap().private.is_some());
    }

    proptest! {
        #[test]
        fn prop_hasher_shapes(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let hasher = KeyHasher::new();
            prop_assert!(hasher.hash(&data).ends_with("#SHA256"));
            let id = hasher.reader_id(&data);
            prop_assert!(id.starts_with("Key!"));
            prop_assert!(id.ends_with("#SHA1"));
        }
    }
}
