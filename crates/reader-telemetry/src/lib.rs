//! # Reader Telemetry
//!
//! Logging and metrics for Ledger-Reader.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` with an `EnvFilter`, pretty or JSON output
//! - **Metrics**: Prometheus counters and a latency histogram
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reader_telemetry::{init_logging, register_metrics, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! register_metrics()?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LR_SERVICE_NAME` | `ledger-reader` | Service name in log lines |
//! | `LR_LOG_LEVEL` | `info` | Log level filter (`RUST_LOG` also accepted) |
//! | `LR_CONSOLE_OUTPUT` | `true` | Write log lines to stdout |
//! | `LR_JSON_LOGS` | `false` | JSON instead of pretty output |

#![warn(missing_docs)]

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    encode_metrics, record_decrypted, record_failure, register_metrics, start_decryption_timer,
    HistogramTimer, DECRYPTION_DURATION, DECRYPTION_FAILURES, DOCUMENTS_DECRYPTED,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// Metrics could not be registered or encoded
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// Configuration value is invalid
    #[error("Invalid configuration: {0}")]
    Config(String),
}
