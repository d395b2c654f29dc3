//! Infrastructure adapters module
//!
//! This module contains adapters for the blockchain node, the external
//! verification APIs and metrics.

pub mod chain;
pub mod escrow_contract;
pub mod monitoring;
pub mod reward_token;
pub mod verification_sources;

pub use chain::SignerClient;
pub use escrow_contract::EthersEscrowContract;
pub use monitoring::{MonitoringAdapter, SourceOutcomeKind};
pub use reward_token::EthersRewardToken;
pub use verification_sources::{BlockchainOracleSource, DnsRootServerSource, RegistrarSource};
