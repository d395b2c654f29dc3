use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Liveness payload served at the API root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ServiceStatus {
    /// Status of a running service, enumerating its endpoints
    pub fn online() -> Self {
        let endpoints = [
            ("get", "/escrow/:id"),
            ("create", "/escrow/create"),
            ("verify", "/escrow/verify/:id"),
            ("listings", "/listings"),
            ("rewards", "/rewards/:address"),
        ]
        .into_iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect();

        Self {
            status: "online".to_string(),
            message: "Domain Chain API is running".to_string(),
            endpoints,
        }
    }
}

/// Liveness payload served at `/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
