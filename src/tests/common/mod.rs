//! In-process fakes for the port traits

use async_trait::async_trait;
use ethers::types::{Address, U256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::ServiceContainer;
use crate::domain::escrow::{ActiveListing, Escrow, EscrowCreation};
use crate::domain::traits::{EscrowContract, RewardToken, VerificationSource};
use crate::domain::verification::VerificationResult;
use crate::shared::error::{AppError, AppResult};
use crate::tests::config;

pub fn address(s: &str) -> Address {
    s.parse().unwrap()
}

/// Escrow contract backed by maps
#[derive(Default)]
pub struct FakeEscrowContract {
    pub escrows: HashMap<u64, Escrow>,
    pub listings: Vec<ActiveListing>,
    pub statuses: HashMap<U256, String>,
    pub reputation: U256,
    /// Error returned by every read and write when set
    pub failure: Option<String>,
    pub created: Mutex<Vec<(String, U256, U256)>>,
}

impl FakeEscrowContract {
    fn check(&self) -> AppResult<()> {
        match &self.failure {
            Some(msg) => Err(AppError::Upstream(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EscrowContract for FakeEscrowContract {
    async fn escrow(&self, id: U256) -> AppResult<Option<Escrow>> {
        self.check()?;
        Ok(self.escrows.get(&id.as_u64()).cloned())
    }

    async fn create_escrow(
        &self,
        domain_name: &str,
        price: U256,
        duration: U256,
    ) -> AppResult<EscrowCreation> {
        self.check()?;
        let mut created = self.created.lock().await;
        created.push((domain_name.to_string(), price, duration));
        Ok(EscrowCreation {
            transaction_hash: format!("0x{:064x}", created.len()),
            escrow_id: created.len().to_string(),
        })
    }

    async fn active_listings(&self) -> AppResult<Vec<ActiveListing>> {
        self.check()?;
        Ok(self.listings.clone())
    }

    async fn verification_status(&self, token_id: U256) -> AppResult<String> {
        self.check()?;
        Ok(self
            .statuses
            .get(&token_id)
            .cloned()
            .unwrap_or_else(|| "pending".to_string()))
    }

    async fn user_reputation(&self, _user: Address) -> AppResult<U256> {
        self.check()?;
        Ok(self.reputation)
    }
}

/// Reward token that records reward queries and transfers
pub struct FakeRewardToken {
    pub signer: Address,
    pub balance: U256,
    pub reward: U256,
    pub reward_queries: Mutex<Vec<(U256, bool)>>,
    pub transfers: Mutex<Vec<(Address, U256)>>,
}

impl Default for FakeRewardToken {
    fn default() -> Self {
        Self {
            signer: address(config::TEST_SIGNER_ADDRESS),
            balance: U256::from(12_500_000_000_000_000_000u128),
            reward: U256::zero(),
            reward_queries: Mutex::new(Vec::new()),
            transfers: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RewardToken for FakeRewardToken {
    fn signer_address(&self) -> Address {
        self.signer
    }

    async fn balance_of(&self, _owner: Address) -> AppResult<U256> {
        Ok(self.balance)
    }

    async fn calculate_reward(&self, transaction_amount: U256, is_seller: bool) -> AppResult<U256> {
        self.reward_queries.lock().await.push((transaction_amount, is_seller));
        Ok(self.reward)
    }

    async fn transfer(&self, to: Address, amount: U256) -> AppResult<String> {
        let mut transfers = self.transfers.lock().await;
        transfers.push((to, amount));
        Ok(format!("0x{:064x}", 0xfeed + transfers.len()))
    }
}

/// Source that always answers with a fixed result
pub struct StaticSource {
    pub name: &'static str,
    pub valid: bool,
    pub confidence: u8,
}

#[async_trait]
impl VerificationSource for StaticSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn verify(&self, _domain_name: &str, _owner_address: &str) -> AppResult<VerificationResult> {
        Ok(VerificationResult::new(self.valid, self.confidence, self.name))
    }
}

/// Source whose API is down
pub struct FailingSource {
    pub name: &'static str,
}

#[async_trait]
impl VerificationSource for FailingSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn verify(&self, _domain_name: &str, _owner_address: &str) -> AppResult<VerificationResult> {
        Err(AppError::Upstream("connection refused".to_string()))
    }
}

pub mod fixtures {
    use super::*;
    use crate::domain::verification::{BLOCKCHAIN_ORACLES, DNS_ROOT_SERVERS, REGISTRAR_APIS};

    pub fn escrow(id: u64, domain_name: &str) -> Escrow {
        Escrow {
            id: U256::from(id),
            domain_name: domain_name.to_string(),
            price: U256::exp10(18),
            seller: address(config::TEST_USER_ADDRESS),
            duration: U256::from(30u64),
            timestamp: U256::from(1_704_067_200u64),
            description: "Short and memorable".to_string(),
            category: "Technology".to_string(),
        }
    }

    pub fn active_listing(token_id: u64, domain_name: &str) -> ActiveListing {
        ActiveListing {
            token_id: U256::from(token_id),
            domain_name: domain_name.to_string(),
            price: U256::from(1_500_000_000_000_000_000u128),
            seller: address(config::TEST_USER_ADDRESS),
            timestamp: 1_704_067_200,
            duration: 14,
            description: String::new(),
            category: String::new(),
        }
    }

    pub fn all_valid_sources() -> Vec<Arc<dyn VerificationSource>> {
        vec![
            Arc::new(StaticSource { name: DNS_ROOT_SERVERS, valid: true, confidence: 90 }),
            Arc::new(StaticSource { name: REGISTRAR_APIS, valid: true, confidence: 80 }),
            Arc::new(StaticSource { name: BLOCKCHAIN_ORACLES, valid: true, confidence: 85 }),
        ]
    }

    /// DNS disagrees, the registrar is down and only the oracle confirms
    pub fn oracle_only_sources() -> Vec<Arc<dyn VerificationSource>> {
        vec![
            Arc::new(StaticSource { name: DNS_ROOT_SERVERS, valid: false, confidence: 90 }),
            Arc::new(FailingSource { name: REGISTRAR_APIS }),
            Arc::new(StaticSource { name: BLOCKCHAIN_ORACLES, valid: true, confidence: 85 }),
        ]
    }
}

/// Service container wired to the given fakes
pub fn services_with(
    contract: FakeEscrowContract,
    token: Option<FakeRewardToken>,
    sources: Vec<Arc<dyn VerificationSource>>,
) -> Arc<ServiceContainer> {
    let contract: Arc<dyn EscrowContract> = Arc::new(contract);
    let token = token.map(|t| Arc::new(t) as Arc<dyn RewardToken>);
    Arc::new(ServiceContainer::with_adapters(config::test_config(), contract, token, sources).unwrap())
}

/// Fakes with one stored escrow (id 1), no listings and all sources valid
pub fn default_services() -> Arc<ServiceContainer> {
    let mut contract = FakeEscrowContract::default();
    contract.escrows.insert(1, fixtures::escrow(1, "example.com"));
    services_with(contract, Some(FakeRewardToken::default()), fixtures::all_valid_sources())
}
