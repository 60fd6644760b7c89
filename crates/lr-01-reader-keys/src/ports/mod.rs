//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: the reader key capability callers use
//! - **Outbound (Driven)**: where key material comes from

pub mod inbound;
pub mod outbound;
