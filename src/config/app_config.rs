//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use validator::Validate;

use crate::config::validation::ConfigValidator;
use crate::shared::error::{AppError, AppResult};

/// Environment variables understood by earlier deployments, mapped onto
/// configuration keys. They take precedence over file and prefixed values.
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("RPC_URL", "chain.rpc_url"),
    ("PRIVATE_KEY", "chain.private_key"),
    ("CONTRACT_ADDRESS", "escrow.contract_address"),
    ("CONTRACT_ABI", "escrow.abi"),
    ("REWARDS_TOKEN_ADDRESS", "rewards.token_address"),
    ("DNS_VERIFICATION_TOKEN", "verification.dns.token"),
    ("REGISTRAR_VERIFICATION_TOKEN", "verification.registrar.token"),
    ("BLOCKCHAIN_ORACLE_TOKEN", "verification.oracle.token"),
];

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Server address to bind to
    pub bind_address: IpAddr,

    /// Server port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,

    /// Maximum request body size in bytes
    #[validate(range(min = 1024, max = 10485760))] // 1KB to 10MB
    pub max_request_size: usize,
}

/// Blockchain node and signer configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint of the node
    #[validate(url)]
    pub rpc_url: String,

    /// Hex-encoded secp256k1 key used to sign transactions
    pub private_key: String,

    /// Chain id used for signing. Queried from the node when absent.
    pub chain_id: Option<u64>,
}

/// Escrow contract configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EscrowConfig {
    /// Deployed escrow contract address
    pub contract_address: String,

    /// Inline JSON ABI
    pub abi: Option<String>,

    /// Path to a JSON ABI file, used when `abi` is not set
    pub abi_path: Option<String>,
}

/// Reward token configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RewardsConfig {
    /// Reward token contract address. Rewards endpoints report
    /// "not initialized" when missing.
    pub token_address: Option<String>,
}

/// A single external verification API
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerificationSourceConfig {
    /// Base URL of the API
    #[validate(url)]
    pub base_url: String,

    /// Bearer token sent with every request
    #[serde(default)]
    pub token: String,
}

/// Domain verification configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VerificationConfig {
    #[validate(nested)]
    pub dns: VerificationSourceConfig,

    #[validate(nested)]
    pub registrar: VerificationSourceConfig,

    #[validate(nested)]
    pub oracle: VerificationSourceConfig,

    /// Per-request timeout for the verification APIs
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,

    /// Minimum validity percentage for a verification to be accepted
    #[validate(range(min = 0, max = 100))]
    pub threshold: u8,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format ("json" or "text")
    #[validate(length(min = 1))]
    pub format: String,
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub chain: ChainConfig,
    pub escrow: EscrowConfig,
    pub rewards: RewardsConfig,
    pub verification: VerificationConfig,
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            max_request_size: 64 * 1024,
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            private_key: String::new(),
            chain_id: None,
        }
    }
}

impl Default for EscrowConfig {
    fn default() -> Self {
        Self {
            contract_address: String::new(),
            abi: None,
            abi_path: None,
        }
    }
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            dns: VerificationSourceConfig {
                base_url: "https://dns-verification.api".to_string(),
                token: String::new(),
            },
            registrar: VerificationSourceConfig {
                base_url: "https://registrar-verification.api".to_string(),
                token: String::new(),
            },
            oracle: VerificationSourceConfig {
                base_url: "https://blockchain-oracle.api".to_string(),
                token: String::new(),
            },
            timeout_seconds: 30,
            threshold: 70,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> AppResult<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("Conf").required(false))
            .add_source(config::Environment::with_prefix("DOMAIN_CHAIN").separator("__"));

        for (var, key) in LEGACY_ENV_KEYS {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let config = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate_config()?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> AppResult<()> {
        let sections: [Result<(), validator::ValidationErrors>; 6] = [
            self.server.validate(),
            self.chain.validate(),
            self.escrow.validate(),
            self.rewards.validate(),
            self.verification.validate(),
            self.logging.validate(),
        ];
        for result in sections {
            result.map_err(|e| {
                AppError::Config(format!("Configuration validation failed: {}", e))
            })?;
        }

        ConfigValidator::validate_config(self)
    }

    /// Verification sources without a bearer token
    pub fn missing_source_tokens(&self) -> Vec<&'static str> {
        ConfigValidator::missing_source_tokens(self)
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}
