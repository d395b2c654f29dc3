//! Reward token balances, reputation and transfers

use std::sync::Arc;

use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::domain::rewards::RewardsData;
use crate::domain::traits::{EscrowContract, RewardToken};
use crate::shared::error::{AppError, AppResult};
use crate::shared::units::{format_ether, parse_address, parse_ether, saturating_u64, AmountInput};

/// Body of `POST /rewards/:address`. Amount is in ether.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<AmountInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferReceipt {
    pub transaction_hash: String,
}

pub struct RewardsService {
    token: Option<Arc<dyn RewardToken>>,
    escrow: Arc<dyn EscrowContract>,
}

impl RewardsService {
    /// `token` is `None` when the reward token could not be initialised; every
    /// call then fails with an internal error.
    pub fn new(token: Option<Arc<dyn RewardToken>>, escrow: Arc<dyn EscrowContract>) -> Self {
        Self { token, escrow }
    }

    fn token(&self) -> AppResult<&Arc<dyn RewardToken>> {
        self.token
            .as_ref()
            .ok_or_else(|| AppError::Upstream("Token contract not initialized".to_string()))
    }

    // Transaction history is not indexed yet, so both figures are zero.
    fn total_user_transactions(&self, _user: Address) -> u64 {
        0
    }

    fn average_transaction_value(&self, _user: Address) -> U256 {
        U256::zero()
    }

    #[instrument(skip(self))]
    pub async fn get_user_rewards(&self, address: &str) -> AppResult<RewardsData> {
        let user = parse_address("address", address)?;
        let token = self.token()?;

        let balance = token.balance_of(user).await?;
        let reputation = self.escrow.user_reputation(user).await?;
        let total_transactions = self.total_user_transactions(user);
        let potential = token
            .calculate_reward(self.average_transaction_value(user), false)
            .await?;

        Ok(RewardsData {
            token_balance: format_ether(balance),
            reputation_score: saturating_u64(reputation),
            total_transactions,
            potential_rewards: format_ether(potential),
        })
    }

    /// Transfer reward tokens from the signer account.
    ///
    /// `from` must be a valid address but does not select the signing
    /// account; a mismatch is only logged.
    #[instrument(skip(self, request))]
    pub async fn transfer_tokens(&self, request: TransferRequest) -> AppResult<TransferReceipt> {
        let (from, to, amount) = match (&request.from, &request.to, &request.amount) {
            (Some(from), Some(to), Some(amount)) => (from, to, amount),
            _ => return Err(AppError::InvalidInput("Missing required parameters".to_string())),
        };

        let from = parse_address("from address", from)?;
        let to = parse_address("to address", to)?;
        let amount = parse_ether(&amount.as_text())?;
        let token = self.token()?;

        if from != token.signer_address() {
            warn!(
                from = ?from,
                signer = ?token.signer_address(),
                "Transfer sender differs from the signing account"
            );
        }

        let transaction_hash = token.transfer(to, amount).await?;
        info!(to = ?to, amount = %format_ether(amount), tx = %transaction_hash, "Reward tokens transferred");
        Ok(TransferReceipt { transaction_hash })
    }
}
