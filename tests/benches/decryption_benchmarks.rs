//! # Ledger Reader Benchmarks
//!
//! | Operation | Dominant cost |
//! |-----------|---------------|
//! | Key hashing | SHA-256 / SHA-1 over the encoded key |
//! | Key unwrap | RSA-OAEP private operation |
//! | Envelope decryption | Two unwraps plus AES-CBC |
//! | Payload decryption | AES-CBC over the ciphertext |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lr_01_reader_keys::{encode_public_key, ReaderKey};
use lr_02_document_decryption::{DecryptionPipeline, Envelope};
use lr_tests::fixtures::*;
use shared_crypto::{decrypt_aes_cbc, KeyHasher};
use std::time::Duration;

// ============================================================================
// Key identity
// ============================================================================

fn bench_key_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("key-identity");
    let alice = alice();
    let encoded = encode_public_key(alice.public_key()).expect("fixture");
    let hasher = KeyHasher::new();

    group.bench_function("public_key_hash", |b| {
        b.iter(|| black_box(hasher.hash(black_box(&encoded))))
    });
    group.bench_function("reader_id", |b| {
        b.iter(|| black_box(hasher.reader_id(black_box(&encoded))))
    });
    group.bench_function("encode_and_hash_rsa_2048", |b| {
        b.iter(|| black_box(alice.encoded_public_key().is_ok()))
    });

    group.finish();
}

// ============================================================================
// Envelope decryption
// ============================================================================

fn bench_unwrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("key-unwrap");
    group.measurement_time(Duration::from_secs(10));

    let alice = alice();
    let wrapped = Envelope::decode("encryptedKey", ALICE_WRAPPED_KEY_128).expect("fixture");
    group.bench_function("rsa_oaep_sha1_2048", |b| {
        b.iter(|| black_box(alice.unwrap(black_box(&wrapped)).is_ok()))
    });

    group.finish();
}

fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope-decryption");
    group.measurement_time(Duration::from_secs(10));

    let pipeline = DecryptionPipeline::default();
    let alice = alice();
    let bob = bob();
    let shared = shared_envelope(CT_128_DOC);

    // Bob's entry comes first, so the lookup cost differs slightly
    group.bench_function("first_entry", |b| {
        b.iter(|| black_box(pipeline.decrypt(&bob, &shared).is_ok()))
    });
    group.bench_function("second_entry", |b| {
        b.iter(|| black_box(pipeline.decrypt(&alice, &shared).is_ok()))
    });

    let foreign = alice_envelope_256(CT_256_HELLO);
    group.bench_function("not_a_reading_key", |b| {
        b.iter(|| black_box(pipeline.decrypt(&bob, &foreign).is_err()))
    });

    group.finish();
}

fn bench_payload(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload-decryption");
    let key = hex::decode(KEY_256).expect("fixture");
    let iv = hex::decode(IV_256).expect("fixture");

    for size in [1024usize, 16 * 1024, 1024 * 1024] {
        let cipher_text = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("aes256_cbc", size), &cipher_text, |b, ct| {
            b.iter(|| black_box(decrypt_aes_cbc(&key, &iv, black_box(ct)).is_ok()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_key_hashing, bench_unwrap, bench_envelope, bench_payload);
criterion_main!(benches);
