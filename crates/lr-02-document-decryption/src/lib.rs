//! # Document Decryption Subsystem (LR-02)
//!
//! Reads documents encrypted for multiple readers: locates the caller's
//! wrapped key entry, unwraps the AES key and IV, decrypts the payload and
//! returns the string it carries.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): envelope, pipeline, configuration
//! - **Ports Layer** (`ports/`): `DocumentDecryptionApi`, `DocumentSource`
//! - **Adapters** (`adapters/`): in-memory document source
//! - **Service Layer** (`service.rs`): wires the pipeline to a reader key
//!
//! ## Security Notes
//!
//! - **Confidentiality only**: payloads carry no authentication tag
//! - **Oracle resistance**: unwrap failures are not distinguished further
//! - **Secret lifetime**: decoded and unwrapped buffers are zeroed on drop

#![warn(missing_docs)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory::{InMemoryDocumentSource, MemorySourceError};
pub use domain::config::{DecryptionConfig, DEFAULT_MAX_CIPHER_TEXT_BYTES};
pub use domain::envelope::{Envelope, WrappedKeyEntry};
pub use domain::errors::DecryptionError;
pub use domain::pipeline::DecryptionPipeline;
pub use ports::inbound::DocumentDecryptionApi;
pub use ports::outbound::DocumentSource;
pub use service::DocumentDecryptionService;
