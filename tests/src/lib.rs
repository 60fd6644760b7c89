//! # Ledger-Reader Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── fixtures/         # PEM keys (alice, bob) used by the vectors
//! ├── src/
//! │   ├── fixtures.rs   # Fixed keys, envelopes and expected identifiers
//! │   └── integration/  # Cross-crate scenarios
//! └── benches/          # Criterion benchmarks
//! ```
//!
//! The wrapped keys and ciphertexts in `fixtures.rs` were produced by an
//! independent OAEP/AES implementation, so these tests check wire
//! compatibility and not just self-consistency.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p lr-tests
//! cargo test -p lr-tests integration::end_to_end
//! cargo bench -p lr-tests
//! ```

pub mod integration;
