//! Escrow service: reads, creation and the marketplace listing feed

use std::sync::Arc;

use chrono::Utc;
use ethers::types::U256;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domain::escrow::{sample_listings, Escrow, EscrowCreation, Listing};
use crate::domain::traits::EscrowContract;
use crate::shared::error::{AppError, AppResult};
use crate::shared::units::{parse_integer, AmountInput};
use crate::shared::validation::ValidationUtils;

/// Body of `POST /escrow/create`. Price is in wei, duration in seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEscrowRequest {
    pub domain_name: Option<String>,
    pub price: Option<AmountInput>,
    pub duration: Option<AmountInput>,
}

pub struct EscrowService {
    contract: Arc<dyn EscrowContract>,
}

impl EscrowService {
    pub fn new(contract: Arc<dyn EscrowContract>) -> Self {
        Self { contract }
    }

    /// The contract handle shared with the other services
    pub fn contract(&self) -> &Arc<dyn EscrowContract> {
        &self.contract
    }

    #[instrument(skip(self))]
    pub async fn get_escrow(&self, id: u64) -> AppResult<Escrow> {
        self.contract
            .escrow(U256::from(id))
            .await?
            .ok_or_else(|| AppError::NotFound("Escrow not found".to_string()))
    }

    /// Submit `createEscrow` and wait for the confirmation.
    ///
    /// Every failure, including reverts and node errors, is reported as a
    /// bad request.
    #[instrument(skip(self, request))]
    pub async fn create_escrow(&self, request: CreateEscrowRequest) -> AppResult<EscrowCreation> {
        let domain_name = ValidationUtils::require("domainName", request.domain_name.as_deref())?;
        let price = request
            .price
            .as_ref()
            .ok_or_else(|| AppError::InvalidInput("Missing required parameter: price".to_string()))?;
        let duration = request
            .duration
            .as_ref()
            .ok_or_else(|| AppError::InvalidInput("Missing required parameter: duration".to_string()))?;

        let price = parse_integer("price", price)?;
        let duration = parse_integer("duration", duration)?;

        let creation = self
            .contract
            .create_escrow(domain_name, price, duration)
            .await
            .map_err(AppError::into_bad_request)?;

        info!(
            domain = %domain_name,
            escrow_id = %creation.escrow_id,
            tx = %creation.transaction_hash,
            "Escrow created"
        );
        Ok(creation)
    }

    /// Active listings with their verification status, or the sample
    /// listings when nothing is listed on chain.
    #[instrument(skip(self))]
    pub async fn listings(&self) -> AppResult<Vec<Listing>> {
        let active = self.contract.active_listings().await?;
        if active.is_empty() {
            info!("No active listings on chain, serving sample listings");
            return Ok(sample_listings(Utc::now()));
        }

        let statuses = try_join_all(
            active
                .iter()
                .map(|listing| self.contract.verification_status(listing.token_id)),
        )
        .await?;

        Ok(active
            .iter()
            .zip(statuses)
            .map(|(listing, status)| Listing::from_active(listing, status))
            .collect())
    }
}
