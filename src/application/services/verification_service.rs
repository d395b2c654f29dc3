//! Multi-source domain ownership verification
//!
//! All configured sources are queried concurrently. A source that fails is
//! counted as an invalid, zero-confidence answer and never fails the request.

use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::domain::traits::VerificationSource;
use crate::domain::verification::{SourceOutcome, VerificationProof, VerificationResult};
use crate::infrastructure::adapters::{MonitoringAdapter, SourceOutcomeKind};
use crate::shared::error::{AppError, AppResult};
use crate::shared::validation::ValidationUtils;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyDomainRequest {
    pub domain_name: Option<String>,
    pub owner_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyDomainResponse {
    pub is_valid: bool,
    pub proof: String,
    pub sources: Vec<String>,
    pub score: u8,
}

pub struct VerificationService {
    sources: Vec<Arc<dyn VerificationSource>>,
    threshold: u8,
    monitoring: Arc<MonitoringAdapter>,
}

impl VerificationService {
    pub fn new(
        sources: Vec<Arc<dyn VerificationSource>>,
        threshold: u8,
        monitoring: Arc<MonitoringAdapter>,
    ) -> Self {
        Self { sources, threshold, monitoring }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Query every source and combine the answers into a proof
    #[instrument(skip(self))]
    pub async fn generate_verification_proof(
        &self,
        domain_name: &str,
        owner_address: &str,
    ) -> AppResult<VerificationProof> {
        let checks = self
            .sources
            .iter()
            .map(|source| self.check_source(source.as_ref(), domain_name, owner_address));
        let outcomes = join_all(checks).await;
        VerificationProof::from_outcomes(&outcomes)
    }

    async fn check_source(
        &self,
        source: &dyn VerificationSource,
        domain_name: &str,
        owner_address: &str,
    ) -> SourceOutcome {
        let result = match source.verify(domain_name, owner_address).await {
            Ok(result) => {
                let kind = if result.valid { SourceOutcomeKind::Valid } else { SourceOutcomeKind::Invalid };
                self.monitoring.record_source_outcome(source.name(), kind);
                result
            }
            Err(e) => {
                warn!(source = source.name(), domain = %domain_name, error = %e, "Verification source failed");
                self.monitoring.record_source_outcome(source.name(), SourceOutcomeKind::Error);
                VerificationResult::unavailable(source.name())
            }
        };

        SourceOutcome {
            source_name: source.name().to_string(),
            result,
        }
    }

    /// Handle `POST /escrow/verify/:id`
    pub async fn verify(&self, request: VerifyDomainRequest) -> AppResult<VerifyDomainResponse> {
        let domain_name = ValidationUtils::require("domainName", request.domain_name.as_deref())?;
        let owner_address = ValidationUtils::require("ownerAddress", request.owner_address.as_deref())?;
        ValidationUtils::validate_domain_name(domain_name)?;

        let proof = self
            .generate_verification_proof(domain_name, owner_address)
            .await
            .map_err(AppError::into_bad_request)?;
        let is_valid = proof.is_acceptable(self.threshold);

        info!(
            domain = %domain_name,
            validity = proof.validity,
            is_valid,
            "Domain verification completed"
        );

        Ok(VerifyDomainResponse {
            is_valid,
            proof: proof.proof,
            sources: proof.sources,
            score: proof.validity,
        })
    }
}
