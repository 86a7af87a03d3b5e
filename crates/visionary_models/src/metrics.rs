//! Metrics for generation calls.
//!
//! OpenTelemetry instruments labelled by operation and model. With no meter
//! provider installed they are no-ops.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;
use visionary_error::GenerationErrorKind;

static METRICS: OnceLock<GenerationMetrics> = OnceLock::new();

/// Instruments for generation calls.
#[derive(Clone)]
pub struct GenerationMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Total generation requests
    pub requests: Counter<u64>,
    /// Failed generation requests
    pub errors: Counter<u64>,
    /// Call duration in seconds
    pub duration: Histogram<f64>,
}

impl GenerationMetrics {
    fn init() -> Self {
        let meter = global::meter("visionary_generation");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("generation.requests")
                .with_description("Total generation requests")
                .build(),
            errors: meter
                .u64_counter("generation.errors")
                .with_description("Failed generation requests")
                .build(),
            duration: meter
                .f64_histogram("generation.duration")
                .with_unit("seconds")
                .with_description("Generation call duration")
                .build(),
        }
    }

    /// Get the global instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a completed call, successful or not.
    pub fn record_request(&self, operation: &'static str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("operation", operation),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed call.
    pub fn record_error(&self, operation: &'static str, model: &str, error_type: &'static str) {
        let labels = &[
            KeyValue::new("operation", operation),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type),
        ];
        self.errors.add(1, labels);
    }
}

impl Default for GenerationMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}

/// Classify an error for metrics labelling.
///
/// Returns one of: "auth", "rate_limit", "server", "invalid_request",
/// "network", "malformed", "empty".
pub fn classify_error(kind: &GenerationErrorKind) -> &'static str {
    match kind {
        kind if kind.is_auth() => "auth",
        GenerationErrorKind::HttpStatus { status_code: 429, .. } => "rate_limit",
        GenerationErrorKind::HttpStatus { status_code, .. } if *status_code >= 500 => "server",
        GenerationErrorKind::HttpStatus { .. } => "invalid_request",
        GenerationErrorKind::Request(_) => "network",
        GenerationErrorKind::MalformedResponse(_) | GenerationErrorKind::Base64Decode(_) => {
            "malformed"
        }
        GenerationErrorKind::EmptyResponse(_) => "empty",
        GenerationErrorKind::MissingCredential => "auth",
    }
}
