//! Prometheus metrics for document decryption.
//!
//! All metrics follow the naming convention: `lr_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: documents decrypted
//! - **CounterVec**: failures by error kind
//! - **Histogram**: end-to-end decryption latency

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Documents successfully decrypted
    pub static ref DOCUMENTS_DECRYPTED: Counter = Counter::new(
        "lr_documents_decrypted_total",
        "Total number of documents successfully decrypted"
    ).expect("metric creation failed");

    /// Decryption failures by error kind
    pub static ref DECRYPTION_FAILURES: CounterVec = CounterVec::new(
        Opts::new("lr_decryption_failures_total", "Total failed decryption attempts"),
        &["kind"]  // kind: not_a_reading_key, decryption_failed, malformed_tag, ...
    ).expect("metric creation failed");

    /// Decryption duration histogram
    pub static ref DECRYPTION_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "lr_decryption_duration_seconds",
            "Time spent decrypting one document"
        ).buckets(exponential_buckets(0.0001, 2.0, 14).expect("valid bucket layout"))
    ).expect("metric creation failed");
}

/// Register every metric with [`REGISTRY`].
///
/// Fails if called twice.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(DOCUMENTS_DECRYPTED.clone()),
        Box::new(DECRYPTION_FAILURES.clone()),
        Box::new(DECRYPTION_DURATION.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }
    Ok(())
}

/// Encode all registered metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Record one successful decryption.
pub fn record_decrypted() {
    DOCUMENTS_DECRYPTED.inc();
}

/// Record one failed decryption under `kind`.
pub fn record_failure(kind: &str) {
    DECRYPTION_FAILURES.with_label_values(&[kind]).inc();
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}

/// Start timing one decryption. Observation happens on drop.
pub fn start_decryption_timer() -> HistogramTimer {
    HistogramTimer::new(&DECRYPTION_DURATION)
}
