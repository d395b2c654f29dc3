//! Validation utilities module
//!
//! This module provides common request validation used across the services.

use regex::Regex;
use std::sync::OnceLock;

use crate::shared::error::{AppError, AppResult};

fn domain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?i)[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$")
            .expect("static regex")
    })
}

/// Validation utilities for the application
pub struct ValidationUtils;

impl ValidationUtils {
    /// Require a non-blank field, returning it trimmed
    pub fn require<'a>(field: &str, value: Option<&'a str>) -> AppResult<&'a str> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(AppError::InvalidInput(format!("Missing required parameter: {}", field))),
        }
    }

    /// Validate a fully qualified domain name such as `example.com`
    pub fn validate_domain_name(domain: &str) -> AppResult<()> {
        if domain.len() > 253 || !domain_pattern().is_match(domain) {
            return Err(AppError::InvalidInput(format!("Invalid domain name: {}", domain)));
        }
        Ok(())
    }
}
