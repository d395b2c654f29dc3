//! Reward token adapter

use async_trait::async_trait;
use ethers::{
    contract::Contract,
    types::{Address, U256},
};
use std::sync::Arc;
use tracing::info;

use crate::domain::traits::RewardToken;
use crate::infrastructure::adapters::chain::{upstream, SignerClient};
use crate::shared::error::{AppError, AppResult};

pub const REWARD_TOKEN_ABI: &[&str] = &[
    "function balanceOf(address owner) view returns (uint256)",
    "function calculateReward(uint256 transactionAmount, bool isSeller) pure returns (uint256)",
    "function transfer(address to, uint256 amount) returns (bool)",
];

/// Reward token contract accessed through the shared signing client
pub struct EthersRewardToken {
    contract: Contract<SignerClient>,
    signer: Address,
}

impl EthersRewardToken {
    pub fn new(token_address: &str, client: Arc<SignerClient>) -> AppResult<Self> {
        let address: Address = token_address
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid reward token address: {}", e)))?;
        let abi = ethers::abi::parse_abi(REWARD_TOKEN_ABI)
            .map_err(|e| AppError::Config(format!("Invalid reward token ABI: {}", e)))?;
        let signer = client.address();

        info!(address = ?address, "Reward token handle created");
        Ok(Self {
            contract: Contract::new(address, abi, client),
            signer,
        })
    }
}

#[async_trait]
impl RewardToken for EthersRewardToken {
    fn signer_address(&self) -> Address {
        self.signer
    }

    async fn balance_of(&self, owner: Address) -> AppResult<U256> {
        self.contract
            .method::<_, U256>("balanceOf", owner)
            .map_err(upstream)?
            .call()
            .await
            .map_err(upstream)
    }

    async fn calculate_reward(&self, transaction_amount: U256, is_seller: bool) -> AppResult<U256> {
        self.contract
            .method::<_, U256>("calculateReward", (transaction_amount, is_seller))
            .map_err(upstream)?
            .call()
            .await
            .map_err(upstream)
    }

    async fn transfer(&self, to: Address, amount: U256) -> AppResult<String> {
        let call = self
            .contract
            .method::<_, bool>("transfer", (to, amount))
            .map_err(upstream)?;

        let pending = call.send().await.map_err(upstream)?;
        let receipt = pending
            .await
            .map_err(upstream)?
            .ok_or_else(|| AppError::Upstream("Transaction dropped before confirmation".to_string()))?;

        info!(tx_hash = ?receipt.transaction_hash, to = ?to, amount = %amount, "Reward tokens transferred");
        Ok(format!("{:?}", receipt.transaction_hash))
    }
}
