//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use regex::Regex;
use std::sync::OnceLock;

use crate::config::AppConfig;
use crate::shared::error::{AppError, AppResult};

fn address_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("static regex"))
}

fn private_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(0x)?[0-9a-fA-F]{64}$").expect("static regex"))
}

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> AppResult<()> {
        Self::validate_rpc_url(&config.chain.rpc_url)?;
        Self::validate_private_key(&config.chain.private_key)?;
        Self::validate_address("escrow.contract_address", &config.escrow.contract_address)?;

        if let Some(token) = &config.rewards.token_address {
            Self::validate_address("rewards.token_address", token)?;
        }

        Ok(())
    }

    /// Verification sources configured without a bearer token.
    /// Reported by the caller once logging is up.
    pub fn missing_source_tokens(config: &AppConfig) -> Vec<&'static str> {
        [
            ("dns", &config.verification.dns),
            ("registrar", &config.verification.registrar),
            ("oracle", &config.verification.oracle),
        ]
        .into_iter()
        .filter(|(_, source)| source.token.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Validate the node RPC URL
    fn validate_rpc_url(url: &str) -> AppResult<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::Config(
                "Chain RPC URL must start with http:// or https://".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate the signing key shape
    fn validate_private_key(key: &str) -> AppResult<()> {
        if !private_key_pattern().is_match(key) {
            return Err(AppError::Config(
                "Signer private key must be 32 bytes of hex".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate a contract address
    fn validate_address(field: &str, address: &str) -> AppResult<()> {
        if !address_pattern().is_match(address) {
            return Err(AppError::Config(format!(
                "{} must be a 0x-prefixed 20-byte hex address",
                field
            )));
        }
        Ok(())
    }
}
