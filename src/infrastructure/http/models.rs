//! HTTP models - Infrastructure concerns

use std::time::{Duration, Instant};

use crate::shared::logging::LoggingUtils;

/// Per-request bookkeeping shared by logging and metrics
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    /// Metric label of the endpoint, such as `escrow.get`
    pub endpoint: &'static str,
    pub started: Instant,
}

impl RequestContext {
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            request_id: LoggingUtils::generate_request_id(),
            endpoint,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
