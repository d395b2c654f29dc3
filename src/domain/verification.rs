//! Domain-ownership verification models
//!
//! A verification consults several independent sources. Each reports a
//! [`VerificationResult`]; the results are folded into a
//! [`VerificationProof`] whose `validity` is the percentage of sources that
//! confirmed ownership and whose `proof` is a keccak-256 digest over the
//! confirming results.

use ethers::utils::keccak256;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppResult;

pub const DNS_ROOT_SERVERS: &str = "dns-root-servers";
pub const REGISTRAR_APIS: &str = "registrar-apis";
pub const BLOCKCHAIN_ORACLES: &str = "blockchain-oracles";

/// Outcome reported by a single verification source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub valid: bool,
    /// 0 to 100
    pub confidence: u8,
    pub source: String,
}

impl VerificationResult {
    pub fn new(valid: bool, confidence: u8, source: &str) -> Self {
        Self {
            valid,
            confidence: confidence.min(100),
            source: source.to_string(),
        }
    }

    /// Result recorded for a source that could not be consulted
    pub fn unavailable(source: &str) -> Self {
        Self::new(false, 0, source)
    }
}

/// A source's result tagged with the name the source was registered under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOutcome {
    pub source_name: String,
    pub result: VerificationResult,
}

/// Serialized form hashed into the proof. Field order is part of the digest.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProofRecord<'a> {
    valid: bool,
    confidence: u8,
    source: &'a str,
    source_name: &'a str,
}

/// Combined verification over all configured sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationProof {
    /// 0x-prefixed keccak-256 hex digest
    pub proof: String,
    /// Percentage of sources that confirmed ownership, 0 to 100
    pub validity: u8,
    /// Names of the confirming sources in declaration order
    pub sources: Vec<String>,
}

impl VerificationProof {
    /// Fold per-source outcomes, given in declaration order, into a proof
    pub fn from_outcomes(outcomes: &[SourceOutcome]) -> AppResult<Self> {
        let confirmed: Vec<&SourceOutcome> = outcomes.iter().filter(|o| o.result.valid).collect();

        Ok(Self {
            proof: proof_digest(&confirmed)?,
            validity: validity_percentage(confirmed.len(), outcomes.len()),
            sources: confirmed.iter().map(|o| o.source_name.clone()).collect(),
        })
    }

    /// Whether the validity reaches the acceptance threshold
    pub fn is_acceptable(&self, threshold: u8) -> bool {
        self.validity >= threshold
    }
}

/// `100 * valid / total`, rounded down
pub fn validity_percentage(valid: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (valid.min(total) * 100 / total) as u8
}

fn proof_digest(confirmed: &[&SourceOutcome]) -> AppResult<String> {
    let serialized = confirmed
        .iter()
        .map(|o| {
            serde_json::to_string(&ProofRecord {
                valid: o.result.valid,
                confidence: o.result.confidence,
                source: &o.result.source,
                source_name: &o.source_name,
            })
        })
        .collect::<Result<Vec<_>, _>>()?
        .join("|");

    Ok(format!("0x{}", hex::encode(keccak256(serialized.as_bytes()))))
}
