//! Service wiring
//!
//! The signing client and the escrow contract handle are created once here
//! and shared by every service for the lifetime of the process.

use std::sync::Arc;

use tracing::{error, info};

use crate::application::services::{EscrowService, RewardsService, VerificationService};
use crate::config::{AppConfig, RewardsConfig};
use crate::domain::traits::{EscrowContract, RewardToken, VerificationSource};
use crate::infrastructure::adapters::{
    chain, verification_sources, EthersEscrowContract, EthersRewardToken, MonitoringAdapter,
    SignerClient,
};
use crate::shared::error::AppResult;

/// Services shared by all request handlers
pub struct ServiceContainer {
    pub config: Arc<AppConfig>,
    pub escrow: Arc<EscrowService>,
    pub verification: Arc<VerificationService>,
    pub rewards: Arc<RewardsService>,
    pub monitoring: Arc<MonitoringAdapter>,
}

impl ServiceContainer {
    /// Connect to the chain and build the production adapters
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let client = chain::connect(&config.chain).await?;
        let escrow_contract: Arc<dyn EscrowContract> =
            Arc::new(EthersEscrowContract::new(&config.escrow, client.clone())?);
        let token = Self::init_reward_token(&config.rewards, client);
        let sources = verification_sources::default_sources(&config.verification)?;

        Self::with_adapters(config, escrow_contract, token, sources)
    }

    /// A missing or unusable token leaves the rewards endpoints failing
    /// instead of aborting startup.
    fn init_reward_token(
        config: &RewardsConfig,
        client: Arc<SignerClient>,
    ) -> Option<Arc<dyn RewardToken>> {
        let Some(address) = config.token_address.as_deref() else {
            error!("Reward token address not configured, rewards endpoints are disabled");
            return None;
        };

        match EthersRewardToken::new(address, client) {
            Ok(token) => Some(Arc::new(token)),
            Err(e) => {
                error!(error = %e, "Failed to initialize reward token contract");
                None
            }
        }
    }

    /// Assemble the services around already-built adapters
    pub fn with_adapters(
        config: AppConfig,
        escrow_contract: Arc<dyn EscrowContract>,
        token: Option<Arc<dyn RewardToken>>,
        sources: Vec<Arc<dyn VerificationSource>>,
    ) -> AppResult<Self> {
        let monitoring = Arc::new(MonitoringAdapter::new()?);
        let threshold = config.verification.threshold;

        let escrow = Arc::new(EscrowService::new(escrow_contract.clone()));
        let verification = Arc::new(VerificationService::new(sources, threshold, monitoring.clone()));
        let rewards = Arc::new(RewardsService::new(token, escrow_contract));

        info!(threshold = threshold, "Services initialized");
        Ok(Self {
            config: Arc::new(config),
            escrow,
            verification,
            rewards,
            monitoring,
        })
    }

    /// The escrow contract handle every service uses
    pub fn escrow_contract(&self) -> Arc<dyn EscrowContract> {
        self.escrow.contract().clone()
    }
}
