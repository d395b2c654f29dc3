//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{error, info};
use uuid::Uuid;

use crate::shared::error::{AppError, AppResult};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level and format ("json" or "text")
    pub fn initialize(level: &str, format: &str) -> AppResult<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let result = if format.eq_ignore_ascii_case("json") {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log an incoming request
    pub fn log_request(request_id: &str, endpoint: &str, subject: Option<&str>) {
        info!(
            request_id = %request_id,
            endpoint = %endpoint,
            subject = subject,
            "Processing request"
        );
    }

    /// Log a successful response
    pub fn log_success(request_id: &str, endpoint: &str, duration_ms: u64) {
        info!(
            request_id = %request_id,
            endpoint = %endpoint,
            duration_ms = %duration_ms,
            "Request completed successfully"
        );
    }

    /// Log an error response
    pub fn log_error(request_id: &str, endpoint: &str, error: &AppError, duration_ms: u64) {
        error!(
            request_id = %request_id,
            endpoint = %endpoint,
            error = %error,
            status = %error.http_status_code().as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    }

    /// Generate a unique request ID
    pub fn generate_request_id() -> String {
        format!("req_{}", Uuid::new_v4().simple())
    }
}
