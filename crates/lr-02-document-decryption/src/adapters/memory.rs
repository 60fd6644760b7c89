//! In-memory document source for embedding and tests.

use crate::ports::outbound::DocumentSource;
use shared_types::JsonDocumentModel;
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

/// Errors of the in-memory source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemorySourceError {
    /// Nothing stored under the reference
    #[error("Document not found: {0}")]
    NotFound(String),
    /// Lock was poisoned by a panicking writer
    #[error("Document store lock poisoned")]
    Poisoned,
}

/// Documents held in a map keyed by record reference.
#[derive(Debug, Default)]
pub struct InMemoryDocumentSource {
    documents: RwLock<HashMap<String, JsonDocumentModel>>,
}

impl InMemoryDocumentSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `document` under `reference`, replacing any previous one.
    pub fn insert(
        &self,
        reference: impl Into<String>,
        document: JsonDocumentModel,
    ) -> Result<(), MemorySourceError> {
        self.documents
            .write()
            .map_err(|_| MemorySourceError::Poisoned)?
            .insert(reference.into(), document);
        Ok(())
    }

    /// Number of stored documents.
    pub fn len(&self) -> Result<usize, MemorySourceError> {
        self.documents
            .read()
            .map(|docs| docs.len())
            .map_err(|_| MemorySourceError::Poisoned)
    }

    /// Whether no documents are stored.
    pub fn is_empty(&self) -> Result<bool, MemorySourceError> {
        self.len().map(|len| len == 0)
    }
}

impl DocumentSource for InMemoryDocumentSource {
    type Error = MemorySourceError;

    fn fetch_document(&self, reference: &str) -> Result<JsonDocumentModel, Self::Error> {
        self.documents
            .read()
            .map_err(|_| MemorySourceError::Poisoned)?
            .get(reference)
            .cloned()
            .ok_or_else(|| MemorySourceError::NotFound(reference.to_string()))
    }
}
