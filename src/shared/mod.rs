//! Shared utilities and common functionality
//!
//! This module contains shared utilities, error handling, logging and
//! unit conversions that are used across the application.

pub mod error;
pub mod logging;
pub mod units;
pub mod validation;

pub use error::{AppError, AppResult};
pub use logging::LoggingUtils;
pub use validation::ValidationUtils;
