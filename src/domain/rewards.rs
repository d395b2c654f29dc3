//! Reward token domain models

use serde::{Deserialize, Serialize};

/// Reward summary for a user, assembled from the token and escrow contracts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsData {
    /// Token balance in ether units
    pub token_balance: String,
    pub reputation_score: u64,
    pub total_transactions: u64,
    /// Reward for the user's average transaction, in ether units
    pub potential_rewards: String,
}
