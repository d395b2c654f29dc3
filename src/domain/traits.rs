//! Contracts that external systems must implement
//!
//! The application layer talks to the escrow contract, the reward token and
//! the verification APIs only through these traits. Infrastructure adapters
//! implement them with ethers and reqwest.

use async_trait::async_trait;
use ethers::types::{Address, U256};

use crate::domain::escrow::{ActiveListing, Escrow, EscrowCreation};
use crate::domain::verification::VerificationResult;
use crate::shared::error::AppResult;

/// On-chain domain escrow contract
#[async_trait]
pub trait EscrowContract: Send + Sync {
    /// Read an escrow. `None` when the contract has no record for `id`.
    async fn escrow(&self, id: U256) -> AppResult<Option<Escrow>>;

    /// Submit `createEscrow` and wait for the receipt
    async fn create_escrow(
        &self,
        domain_name: &str,
        price: U256,
        duration: U256,
    ) -> AppResult<EscrowCreation>;

    async fn active_listings(&self) -> AppResult<Vec<ActiveListing>>;

    async fn verification_status(&self, token_id: U256) -> AppResult<String>;

    async fn user_reputation(&self, user: Address) -> AppResult<U256>;
}

/// ERC20-like reward token
#[async_trait]
pub trait RewardToken: Send + Sync {
    /// Account that signs token transactions
    fn signer_address(&self) -> Address;

    async fn balance_of(&self, owner: Address) -> AppResult<U256>;

    async fn calculate_reward(&self, transaction_amount: U256, is_seller: bool) -> AppResult<U256>;

    /// Transfer from the signer account and wait for the receipt.
    /// Returns the transaction hash.
    async fn transfer(&self, to: Address, amount: U256) -> AppResult<String>;
}

/// Independent evidence of domain ownership
#[async_trait]
pub trait VerificationSource: Send + Sync {
    /// Name the source is reported under
    fn name(&self) -> &'static str;

    async fn verify(&self, domain_name: &str, owner_address: &str) -> AppResult<VerificationResult>;
}
