//! Monitoring adapter for metrics and observability
//!
//! This adapter owns the Prometheus registry exposed at `/metrics`.

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

use crate::shared::error::{AppError, AppResult};

/// Outcome label for a verification source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOutcomeKind {
    Valid,
    Invalid,
    Error,
}

impl SourceOutcomeKind {
    fn as_str(&self) -> &'static str {
        match self {
            SourceOutcomeKind::Valid => "valid",
            SourceOutcomeKind::Invalid => "invalid",
            SourceOutcomeKind::Error => "error",
        }
    }
}

/// Adapter for monitoring and metrics services
pub struct MonitoringAdapter {
    registry: Registry,
    requests: IntCounterVec,
    request_duration: HistogramVec,
    source_outcomes: IntCounterVec,
}

fn metrics_error(err: prometheus::Error) -> AppError {
    AppError::Internal(format!("Metrics error: {}", err))
}

impl MonitoringAdapter {
    /// Create a new monitoring adapter with its own registry
    pub fn new() -> AppResult<Self> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("domain_chain_requests_total", "Total number of API requests"),
            &["endpoint", "status"],
        )
        .map_err(metrics_error)?;

        let request_duration = HistogramVec::new(
            HistogramOpts::new(
                "domain_chain_request_duration_seconds",
                "API request duration in seconds",
            ),
            &["endpoint"],
        )
        .map_err(metrics_error)?;

        let source_outcomes = IntCounterVec::new(
            Opts::new(
                "domain_chain_verification_source_total",
                "Verification source outcomes",
            ),
            &["source", "outcome"],
        )
        .map_err(metrics_error)?;

        registry.register(Box::new(requests.clone())).map_err(metrics_error)?;
        registry.register(Box::new(request_duration.clone())).map_err(metrics_error)?;
        registry.register(Box::new(source_outcomes.clone())).map_err(metrics_error)?;

        Ok(Self {
            registry,
            requests,
            request_duration,
            source_outcomes,
        })
    }

    /// Record a completed request
    pub fn record_request(&self, endpoint: &str, status: u16, duration_secs: f64) {
        let status = status.to_string();
        self.requests
            .with_label_values(&[endpoint, status.as_str()])
            .inc();
        self.request_duration
            .with_label_values(&[endpoint])
            .observe(duration_secs);
    }

    /// Record the outcome of a single verification source
    pub fn record_source_outcome(&self, source: &str, outcome: SourceOutcomeKind) {
        self.source_outcomes
            .with_label_values(&[source, outcome.as_str()])
            .inc();
    }

    /// Number of requests recorded for an endpoint and status
    pub fn request_count(&self, endpoint: &str, status: u16) -> u64 {
        let status = status.to_string();
        self.requests
            .with_label_values(&[endpoint, status.as_str()])
            .get()
    }

    /// Get Prometheus metrics in text format
    pub fn gather_text(&self) -> AppResult<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(metrics_error)?;
        String::from_utf8(buffer).map_err(|e| AppError::Internal(e.to_string()))
    }
}
