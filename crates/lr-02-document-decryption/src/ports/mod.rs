//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that callers use to read documents
//! - **Outbound (Driven)**: where encrypted documents come from

pub mod inbound;
pub mod outbound;
