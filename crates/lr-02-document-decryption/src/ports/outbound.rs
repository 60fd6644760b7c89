//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits for fetching encrypted documents. The HTTP client talking to the
//! ledger node implements these outside this crate.

use shared_types::JsonDocumentModel;

/// Source of document records.
pub trait DocumentSource: Send + Sync {
    /// Error type of the source.
    type Error: std::fmt::Display;

    /// Fetch the document record stored under `reference`.
    fn fetch_document(&self, reference: &str) -> Result<JsonDocumentModel, Self::Error>;
}
