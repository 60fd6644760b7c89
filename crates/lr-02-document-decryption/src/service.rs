//! # Document Decryption Service
//!
//! Application service layer that implements the `DocumentDecryptionApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`DocumentDecryptionApi`)
//! - Uses the outbound port (`DocumentSource`) to fetch records
//! - Delegates cryptographic work to the domain pipeline
//! - Records Prometheus metrics for every attempt

use crate::domain::config::DecryptionConfig;
use crate::domain::envelope::Envelope;
use crate::domain::errors::DecryptionError;
use crate::domain::pipeline::DecryptionPipeline;
use crate::ports::inbound::DocumentDecryptionApi;
use crate::ports::outbound::DocumentSource;
use lr_01_reader_keys::ReaderKey;
use reader_telemetry::metrics;
use shared_types::JsonDocumentModel;
use tracing::{debug, info_span};

/// Document decryption service bound to one reader key.
pub struct DocumentDecryptionService<R: ReaderKey> {
    reader: R,
    pipeline: DecryptionPipeline,
}

impl<R: ReaderKey> DocumentDecryptionService<R> {
    /// Create a service with the default configuration.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pipeline: DecryptionPipeline::default(),
        }
    }

    /// Create a service with an explicit configuration.
    pub fn with_config(reader: R, config: DecryptionConfig) -> Result<Self, DecryptionError> {
        Ok(Self {
            reader,
            pipeline: DecryptionPipeline::new(config)?,
        })
    }

    /// The reader key in use.
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Fetch the record stored under `reference` from `source` and decrypt it.
    pub fn read_document<S: DocumentSource>(
        &self,
        source: &S,
        reference: &str,
    ) -> Result<String, DecryptionError> {
        let _span = info_span!("read_document", reference).entered();
        let document = source.fetch_document(reference).map_err(|e| {
            let err = DecryptionError::Source(e.to_string());
            metrics::record_failure(err.kind());
            err
        })?;
        self.decrypt_document(&document)
    }

    fn observe(&self, result: Result<String, DecryptionError>) -> Result<String, DecryptionError> {
        match &result {
            Ok(_) => metrics::record_decrypted(),
            Err(err) => {
                debug!(kind = err.kind(), error = %err, "Decryption failed");
                metrics::record_failure(err.kind());
            }
        }
        result
    }
}

impl<R: ReaderKey> DocumentDecryptionApi for DocumentDecryptionService<R> {
    fn reader_key_hash(&self) -> &str {
        self.reader.public_key_hash()
    }

    fn can_read(&self, envelope: &Envelope) -> bool {
        envelope.find_entry(self.reader.public_key_hash()).is_some()
    }

    fn decrypt_envelope(&self, envelope: &Envelope) -> Result<String, DecryptionError> {
        let _span = info_span!("decrypt_envelope", recipients = envelope.entries.len()).entered();
        let _timer = metrics::start_decryption_timer();
        self.observe(self.pipeline.decrypt(&self.reader, envelope))
    }

    fn decrypt_document(&self, document: &JsonDocumentModel) -> Result<String, DecryptionError> {
        let Some(encrypted) = document.encrypted_json.clone() else {
            return self.observe(Err(DecryptionError::MissingEncryptedPayload));
        };
        self.decrypt_envelope(&Envelope::from(encrypted))
    }

    fn decrypt_document_json(&self, json: &str) -> Result<String, DecryptionError> {
        let document: JsonDocumentModel = match serde_json::from_str(json) {
            Ok(document) => document,
            Err(e) => return self.observe(Err(DecryptionError::InvalidDocument(e.to_string()))),
        };
        self.decrypt_document(&document)
    }
}
