//! REST adapters for the external domain-ownership verification APIs
//!
//! Each adapter returns an error for any transport, status or parsing
//! failure; the verification service downgrades those to an invalid result.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::{VerificationConfig, VerificationSourceConfig};
use crate::domain::traits::VerificationSource;
use crate::domain::verification::{
    VerificationResult, BLOCKCHAIN_ORACLES, DNS_ROOT_SERVERS, REGISTRAR_APIS,
};
use crate::shared::error::{AppError, AppResult};

const DNS_CONFIDENCE: u8 = 90;
const REGISTRAR_DEFAULT_CONFIDENCE: u8 = 80;
const ORACLE_CONFIDENCE: u8 = 85;

#[derive(Debug, Deserialize)]
struct OwnerRecord {
    owner: String,
}

#[derive(Debug, Deserialize)]
struct RegistrarVerdict {
    #[serde(default)]
    verified: bool,
    #[serde(default)]
    confidence: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct RegistrarQuery<'a> {
    domain: &'a str,
    owner: &'a str,
}

/// Case-insensitive comparison of a reported owner with the claimed one
pub fn owner_matches(reported: &str, claimed: &str) -> bool {
    reported.eq_ignore_ascii_case(claimed)
}

/// Registrar-reported confidence as a number or numeric string.
/// Absent, zero or unparseable values fall back to the default. Fractions
/// round half away from zero, so 92.5 becomes 93.
pub fn registrar_confidence(reported: Option<&serde_json::Value>) -> u8 {
    let value = match reported {
        Some(serde_json::Value::Number(number)) => number.as_f64(),
        Some(serde_json::Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    match value {
        Some(value) if value.is_finite() && value > 0.0 => value.min(100.0).round() as u8,
        _ => REGISTRAR_DEFAULT_CONFIDENCE,
    }
}

/// Build the HTTP client shared by all sources
pub fn build_client(config: &VerificationConfig) -> AppResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))
}

/// The three sources in declaration order
pub fn default_sources(config: &VerificationConfig) -> AppResult<Vec<Arc<dyn VerificationSource>>> {
    let client = build_client(config)?;
    Ok(vec![
        Arc::new(DnsRootServerSource::new(client.clone(), &config.dns)),
        Arc::new(RegistrarSource::new(client.clone(), &config.registrar)),
        Arc::new(BlockchainOracleSource::new(client, &config.oracle)),
    ])
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

async fn fetch_owner(client: &Client, url: &str, token: &str) -> AppResult<OwnerRecord> {
    debug!(url = %url, "Looking up domain owner");
    let record = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?
        .json::<OwnerRecord>()
        .await?;
    Ok(record)
}

/// DNS root-server ownership lookup
pub struct DnsRootServerSource {
    client: Client,
    base_url: String,
    token: String,
}

impl DnsRootServerSource {
    pub fn new(client: Client, config: &VerificationSourceConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }
}

#[async_trait]
impl VerificationSource for DnsRootServerSource {
    fn name(&self) -> &'static str {
        DNS_ROOT_SERVERS
    }

    async fn verify(&self, domain_name: &str, owner_address: &str) -> AppResult<VerificationResult> {
        let url = endpoint(&self.base_url, &format!("lookup/{}", domain_name));
        let record = fetch_owner(&self.client, &url, &self.token).await?;
        let valid = owner_matches(&record.owner, owner_address);
        Ok(VerificationResult::new(valid, DNS_CONFIDENCE, DNS_ROOT_SERVERS))
    }
}

/// Registrar verification API
pub struct RegistrarSource {
    client: Client,
    base_url: String,
    token: String,
}

impl RegistrarSource {
    pub fn new(client: Client, config: &VerificationSourceConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }
}

#[async_trait]
impl VerificationSource for RegistrarSource {
    fn name(&self) -> &'static str {
        REGISTRAR_APIS
    }

    async fn verify(&self, domain_name: &str, owner_address: &str) -> AppResult<VerificationResult> {
        let verdict = self
            .client
            .post(endpoint(&self.base_url, "verify"))
            .bearer_auth(&self.token)
            .json(&RegistrarQuery { domain: domain_name, owner: owner_address })
            .send()
            .await?
            .error_for_status()?
            .json::<RegistrarVerdict>()
            .await?;

        Ok(VerificationResult::new(
            verdict.verified,
            registrar_confidence(verdict.confidence.as_ref()),
            REGISTRAR_APIS,
        ))
    }
}

/// Blockchain oracle of recorded domain ownership
pub struct BlockchainOracleSource {
    client: Client,
    base_url: String,
    token: String,
}

impl BlockchainOracleSource {
    pub fn new(client: Client, config: &VerificationSourceConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }
}

#[async_trait]
impl VerificationSource for BlockchainOracleSource {
    fn name(&self) -> &'static str {
        BLOCKCHAIN_ORACLES
    }

    async fn verify(&self, domain_name: &str, owner_address: &str) -> AppResult<VerificationResult> {
        let url = endpoint(&self.base_url, &format!("domain-ownership/{}", domain_name));
        let record = fetch_owner(&self.client, &url, &self.token).await?;
        let valid = owner_matches(&record.owner, owner_address);
        Ok(VerificationResult::new(valid, ORACLE_CONFIDENCE, BLOCKCHAIN_ORACLES))
    }
}
