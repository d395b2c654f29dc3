//! Error handling module
//!
//! This module provides centralized error handling for the application.
//! Every handler maps failures through [`AppError::http_status_code`], so
//! status codes are decided here rather than per endpoint.

use serde_json::Value;
use thiserror::Error;
use warp::http::StatusCode;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotSupported,

    /// A contract call or external service failed. The message is the raw
    /// upstream error text.
    #[error("{0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotSupported => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Upstream(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// JSON error body returned to clients
    pub fn to_json(&self) -> Value {
        serde_json::json!({ "error": self.to_string() })
    }

    /// Re-classify a failed write as a bad request.
    ///
    /// Escrow creation and domain verification report every failure as 400;
    /// not-found and method errors keep their own status.
    pub fn into_bad_request(self) -> Self {
        match self {
            AppError::Upstream(msg) | AppError::Internal(msg) => AppError::InvalidInput(msg),
            other => other,
        }
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl warp::reject::Reject for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<ethers::abi::Error> for AppError {
    fn from(err: ethers::abi::Error) -> Self {
        AppError::Config(format!("ABI error: {}", err))
    }
}

impl From<ethers::utils::ConversionError> for AppError {
    fn from(err: ethers::utils::ConversionError) -> Self {
        AppError::InvalidInput(format!("Invalid amount: {}", err))
    }
}
